//! Role extraction for admin requests.
//!
//! Authentication happens in the proxy in front of the admin panel, which
//! forwards the signed-in user's role in the `x-admin-role` header. Handlers
//! receive the role explicitly through the [`CurrentRole`] extractor and pass
//! it on to view builders; nothing reads it from ambient state.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use order_desk_core::AdminRole;

use crate::state::AppState;

/// Header carrying the current user's role.
pub const ROLE_HEADER: &str = "x-admin-role";

/// The current user's role, if any.
///
/// Falls back to `ORDER_DESK_DEFAULT_ROLE` when the header is absent. An
/// unrecognized header value yields no role at all, so it can never unlock
/// anything.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CurrentRole(role): CurrentRole) -> impl IntoResponse {
///     match role {
///         Some(r) => format!("Hello, {r}!"),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentRole(pub Option<AdminRole>);

impl CurrentRole {
    /// Resolve the role from a header value and the configured default.
    #[must_use]
    pub fn resolve(header: Option<&str>, default: Option<AdminRole>) -> Self {
        match header {
            Some(value) => match value.parse::<AdminRole>() {
                Ok(role) => Self(Some(role)),
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring unrecognized role header");
                    Self(None)
                }
            },
            None => Self(default),
        }
    }
}

impl FromRequestParts<AppState> for CurrentRole {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok());

        Ok(Self::resolve(header, state.config().default_role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_wins_over_default() {
        assert_eq!(
            CurrentRole::resolve(Some("SuperAdmin"), Some(AdminRole::Viewer)),
            CurrentRole(Some(AdminRole::SuperAdmin))
        );
    }

    #[test]
    fn test_default_used_without_header() {
        assert_eq!(
            CurrentRole::resolve(None, Some(AdminRole::Admin)),
            CurrentRole(Some(AdminRole::Admin))
        );
        assert_eq!(CurrentRole::resolve(None, None), CurrentRole(None));
    }

    #[test]
    fn test_header_must_match_exactly() {
        for raw in ["super_admin", " SuperAdmin ", "SuperAdmin ", "superAdmin"] {
            assert_eq!(
                CurrentRole::resolve(Some(raw), None),
                CurrentRole(None),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_unknown_header_means_no_role() {
        assert_eq!(
            CurrentRole::resolve(Some("owner"), Some(AdminRole::SuperAdmin)),
            CurrentRole(None)
        );
    }
}
