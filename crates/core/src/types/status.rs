//! Status and role enums.
//!
//! Orders and items share one closed set of lifecycle statuses. The set is
//! closed on purpose: raw strings are parsed at the boundary and anything
//! unknown is rejected there instead of rendering with a fallback style.

use serde::{Deserialize, Serialize};

/// Badge style used for any status label outside the known set.
pub const FALLBACK_BADGE_CLASS: &str = "bg-gray-100 text-gray-800";

/// Error returned when a string is not a known [`OrderStatus`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid order status: {0}")]
pub struct StatusParseError(pub String);

/// Lifecycle status of an order or of a single item.
///
/// Order status and item statuses are independent: nothing derives one from
/// the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(alias = "pending")]
    Pending,
    #[serde(rename = "In Progress", alias = "in_progress")]
    InProgress,
    #[serde(alias = "completed")]
    Completed,
    #[serde(alias = "delivered")]
    Delivered,
}

impl OrderStatus {
    /// All statuses in display order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Delivered,
    ];

    /// Human-readable label, as shown on badges and in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Delivered => "Delivered",
        }
    }

    /// Form parameter value.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Delivered => "delivered",
        }
    }

    /// Badge style token for this status.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Pending => "bg-yellow-100 text-yellow-800",
            Self::InProgress => "bg-blue-100 text-blue-800",
            Self::Completed => "bg-green-100 text-green-800",
            Self::Delivered => "bg-purple-100 text-purple-800",
        }
    }
}

/// Badge style token for a raw status label.
///
/// Total over all strings: anything that is not a known status gets
/// [`FALLBACK_BADGE_CLASS`].
#[must_use]
pub fn status_badge_class(raw: &str) -> &'static str {
    raw.parse::<OrderStatus>()
        .map_or(FALLBACK_BADGE_CLASS, OrderStatus::badge_class)
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == s || status.as_param() == s)
            .ok_or_else(|| StatusParseError(s.to_owned()))
    }
}

/// Error returned when a string is not a known [`AdminRole`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid admin role: {0}")]
pub struct RoleParseError(pub String);

/// Admin role with different permission levels.
///
/// Role values are compared exactly (`SuperAdmin`, `Admin`, `Viewer`); a
/// value differing in case, spelling or surrounding whitespace is not a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminRole {
    /// Full access, including creating new orders.
    SuperAdmin,
    /// Can manage existing orders.
    Admin,
    /// Read-only access.
    Viewer,
}

impl AdminRole {
    /// Whether this role may open the order creation flow.
    #[must_use]
    pub const fn can_create_orders(self) -> bool {
        matches!(self, Self::SuperAdmin)
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "SuperAdmin"),
            Self::Admin => write!(f, "Admin"),
            Self::Viewer => write!(f, "Viewer"),
        }
    }
}

impl std::str::FromStr for AdminRole {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SuperAdmin" => Ok(Self::SuperAdmin),
            "Admin" => Ok(Self::Admin),
            "Viewer" => Ok(Self::Viewer),
            other => Err(RoleParseError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(OrderStatus::InProgress.to_string(), "In Progress");
        assert_eq!(OrderStatus::Delivered.label(), "Delivered");
    }

    #[test]
    fn test_status_parses_label_and_param() {
        assert_eq!("In Progress".parse(), Ok(OrderStatus::InProgress));
        assert_eq!("in_progress".parse(), Ok(OrderStatus::InProgress));
        assert_eq!("Completed".parse(), Ok(OrderStatus::Completed));
        assert_eq!(
            "Shipped".parse::<OrderStatus>(),
            Err(StatusParseError("Shipped".to_string()))
        );
    }

    #[test]
    fn test_status_serde_uses_labels() {
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let parsed: OrderStatus = serde_json::from_str("\"Delivered\"").unwrap();
        assert_eq!(parsed, OrderStatus::Delivered);

        assert!(serde_json::from_str::<OrderStatus>("\"Lost\"").is_err());
    }

    #[test]
    fn test_serde_accepts_what_from_str_accepts() {
        for status in OrderStatus::ALL {
            for raw in [status.label(), status.as_param()] {
                let json = format!("\"{raw}\"");
                let parsed: OrderStatus = serde_json::from_str(&json).unwrap();
                assert_eq!(parsed, status);
                assert_eq!(raw.parse::<OrderStatus>(), Ok(status));
            }
        }
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(
            OrderStatus::Pending.badge_class(),
            "bg-yellow-100 text-yellow-800"
        );
        assert_eq!(
            OrderStatus::InProgress.badge_class(),
            "bg-blue-100 text-blue-800"
        );
        assert_eq!(
            OrderStatus::Completed.badge_class(),
            "bg-green-100 text-green-800"
        );
        assert_eq!(
            OrderStatus::Delivered.badge_class(),
            "bg-purple-100 text-purple-800"
        );
    }

    #[test]
    fn test_raw_badge_class_falls_back() {
        assert_eq!(status_badge_class("In Progress"), "bg-blue-100 text-blue-800");
        assert_eq!(status_badge_class("Cancelled"), FALLBACK_BADGE_CLASS);
        assert_eq!(status_badge_class(""), FALLBACK_BADGE_CLASS);
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("SuperAdmin".parse(), Ok(AdminRole::SuperAdmin));
        assert_eq!("Viewer".parse(), Ok(AdminRole::Viewer));
        assert!("root".parse::<AdminRole>().is_err());
    }

    #[test]
    fn test_role_parsing_is_exact() {
        for raw in ["super_admin", "superadmin", "SUPERADMIN", " SuperAdmin ", "SuperAdmin\n"] {
            assert_eq!(
                raw.parse::<AdminRole>(),
                Err(RoleParseError(raw.to_owned())),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_role_display_round_trips() {
        for role in [AdminRole::SuperAdmin, AdminRole::Admin, AdminRole::Viewer] {
            assert_eq!(role.to_string().parse(), Ok(role));
        }
    }

    #[test]
    fn test_only_super_admin_creates_orders() {
        assert!(AdminRole::SuperAdmin.can_create_orders());
        assert!(!AdminRole::Admin.can_create_orders());
        assert!(!AdminRole::Viewer.can_create_orders());
    }
}
