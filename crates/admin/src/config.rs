//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ORDER_DESK_HOST` - Bind address (default: 127.0.0.1)
//! - `ORDER_DESK_PORT` - Listen port (default: 3002)
//! - `ORDER_DESK_SEED_FILE` - YAML/JSON file with the initial orders (default: built-in demo orders)
//! - `ORDER_DESK_DEFAULT_ROLE` - Role assumed when the auth proxy sends no `x-admin-role` header
//! - `ORDER_DESK_DASHBOARD_URL` - Target of "Back to Dashboard" (default: /)
//! - `ORDER_DESK_NEW_ORDER_URL` - Target of "New Order" (default: /new-order)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 1.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use order_desk_core::AdminRole;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the page's navigation buttons lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    /// "Back to Dashboard" target.
    pub dashboard_url: String,
    /// "New Order" target, shown to super admins only.
    pub new_order_url: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            dashboard_url: "/".to_string(),
            new_order_url: "/new-order".to_string(),
        }
    }
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Seed file with the initial orders (`None` uses the demo orders)
    pub seed_file: Option<PathBuf>,
    /// Role used when the request carries no role header
    pub default_role: Option<AdminRole>,
    /// Navigation targets
    pub navigation: NavigationConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3002,
            seed_file: None,
            default_role: None,
            navigation: NavigationConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ORDER_DESK_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORDER_DESK_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ORDER_DESK_PORT", "3002")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ORDER_DESK_PORT".to_string(), e.to_string()))?;
        let seed_file = get_optional_env("ORDER_DESK_SEED_FILE").map(PathBuf::from);
        let default_role = get_optional_env("ORDER_DESK_DEFAULT_ROLE")
            .map(|role| {
                role.parse::<AdminRole>().map_err(|e| {
                    ConfigError::InvalidEnvVar("ORDER_DESK_DEFAULT_ROLE".to_string(), e.to_string())
                })
            })
            .transpose()?;

        let defaults = NavigationConfig::default();
        let navigation = NavigationConfig {
            dashboard_url: get_env_or_default("ORDER_DESK_DASHBOARD_URL", &defaults.dashboard_url),
            new_order_url: get_env_or_default("ORDER_DESK_NEW_ORDER_URL", &defaults.new_order_url),
        };

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            seed_file,
            default_role,
            navigation,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable. Empty values count as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}
