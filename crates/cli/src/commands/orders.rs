//! Order inspection commands.
//!
//! # Environment Variables
//!
//! - `ORDER_DESK_SEED_FILE` - Seed file used when `--seed` is not given
//!   (read through the admin server's configuration)

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use order_desk_admin::config::{AdminConfig, ConfigError};
use order_desk_admin::seed::{SeedError, load_seed};
use order_desk_admin::services::order_notification;
use order_desk_core::{Order, OrderId};

/// Errors that can occur while inspecting orders.
#[derive(Debug, Error)]
pub enum OrdersError {
    /// Environment configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Seed could not be loaded.
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// No order with the requested ID.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The notification link could not be built.
    #[error("Invalid notification link: {0}")]
    Link(#[from] url::ParseError),
}

/// The seed file to use: `seed` if given, otherwise the admin server's
/// configured `ORDER_DESK_SEED_FILE` (`None` means the demo seed).
fn seed_path(seed: Option<PathBuf>) -> Result<Option<PathBuf>, ConfigError> {
    match seed {
        Some(path) => Ok(Some(path)),
        None => Ok(AdminConfig::from_env()?.seed_file),
    }
}

/// Load orders the same way the admin server does at startup.
async fn load_orders(seed: Option<PathBuf>) -> Result<Vec<Order>, OrdersError> {
    let path = seed_path(seed)?;
    Ok(load_seed(path.as_deref()).await?)
}

/// List orders with their items.
///
/// # Errors
///
/// Returns an error if the seed cannot be loaded.
pub async fn list(seed: Option<PathBuf>) -> Result<(), OrdersError> {
    let orders = load_orders(seed).await?;

    info!("Orders ({})", orders.len());
    info!("==========");
    for order in &orders {
        info!(
            "#{} {} ({}) [{}] created {}",
            order.id, order.customer_name, order.phone_number, order.status, order.created_at
        );
        for item in &order.items {
            info!(
                "    - {} x{} [{}]",
                item.description, item.quantity, item.status
            );
        }
    }

    Ok(())
}

/// Print the WhatsApp notification link for one order.
///
/// # Errors
///
/// Returns an error if the seed cannot be loaded or the order does not exist.
pub async fn link(order_id: OrderId, seed: Option<PathBuf>) -> Result<(), OrdersError> {
    let orders = load_orders(seed).await?;
    let order = orders
        .iter()
        .find(|order| order.id == order_id)
        .ok_or(OrdersError::NotFound(order_id))?;

    let link = order_notification(order)?;

    info!("Notification link for order #{}:", order.id);
    info!("  {}", link);

    Ok(())
}
