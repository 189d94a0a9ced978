//! Seed data for the order store.
//!
//! Orders are supplied at start-up, either from a YAML/JSON file named by
//! `ORDER_DESK_SEED_FILE` or from the built-in demo seed. The running store
//! never creates orders, so this is the one place where identifier
//! uniqueness is checked.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, instrument};

use order_desk_core::{ItemId, Order, OrderId};

const DEMO_SEED: &str = include_str!("../seeds/demo.yaml");

/// Errors that can occur while loading seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not valid YAML for a list of orders.
    #[error("Invalid YAML seed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The seed file is not valid JSON for a list of orders.
    #[error("Invalid JSON seed: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not one of `yaml`, `yml`, `json`.
    #[error("Unsupported seed format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    /// Two orders share an ID.
    #[error("Duplicate order ID in seed: {0}")]
    DuplicateOrderId(OrderId),

    /// Two items share an ID, in the same order or in different ones.
    #[error("Duplicate item ID in seed: {0}")]
    DuplicateItemId(ItemId),
}

/// Seed file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Yaml,
    Json,
}

impl SeedFormat {
    /// Pick the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(SeedError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse and validate seed orders from a string.
///
/// # Errors
///
/// Returns an error if the content does not parse or if IDs are duplicated.
pub fn parse_seed(content: &str, format: SeedFormat) -> Result<Vec<Order>, SeedError> {
    let orders: Vec<Order> = match format {
        SeedFormat::Yaml => serde_yaml::from_str(content)?,
        SeedFormat::Json => serde_json::from_str(content)?,
    };
    validate_ids(&orders)?;
    Ok(orders)
}

/// Load and validate seed orders from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unsupported
/// extension, does not parse, or contains duplicate IDs.
#[instrument]
pub async fn load_seed_file(path: &Path) -> Result<Vec<Order>, SeedError> {
    let format = SeedFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let orders = parse_seed(&content, format)?;
    info!(orders = orders.len(), "Loaded seed file");
    Ok(orders)
}

/// Load the configured seed, falling back to the demo orders.
///
/// # Errors
///
/// See [`load_seed_file`].
pub async fn load_seed(path: Option<&Path>) -> Result<Vec<Order>, SeedError> {
    match path {
        Some(path) => load_seed_file(path).await,
        None => {
            info!("No seed file configured, using demo orders");
            demo_orders()
        }
    }
}

/// The built-in demo orders.
///
/// # Errors
///
/// Only fails if the embedded seed is broken, which its tests rule out.
pub fn demo_orders() -> Result<Vec<Order>, SeedError> {
    parse_seed(DEMO_SEED, SeedFormat::Yaml)
}

/// Check that order IDs are unique and item IDs are unique store-wide.
///
/// # Errors
///
/// Returns the first duplicate found, in seed order.
pub fn validate_ids(orders: &[Order]) -> Result<(), SeedError> {
    let mut order_ids = HashSet::new();
    let mut item_ids = HashSet::new();

    for order in orders {
        if !order_ids.insert(order.id) {
            return Err(SeedError::DuplicateOrderId(order.id));
        }
        for item in &order.items {
            if !item_ids.insert(item.id) {
                return Err(SeedError::DuplicateItemId(item.id));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use order_desk_core::OrderStatus;

    use super::*;

    #[test]
    fn test_demo_seed_parses() {
        let orders = demo_orders().unwrap();
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].customer_name, "John Doe");
        assert_eq!(orders[0].phone_number.as_str(), "123-456-7890");
        assert_eq!(orders[0].items.len(), 2);
        assert_eq!(orders[0].items[1].status, OrderStatus::InProgress);
        assert_eq!(orders[2].created_at.to_string(), "2023-04-03");
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SeedFormat::from_path(Path::new("orders.YML")).unwrap(),
            SeedFormat::Yaml
        );
        assert_eq!(
            SeedFormat::from_path(Path::new("orders.json")).unwrap(),
            SeedFormat::Json
        );
        assert!(matches!(
            SeedFormat::from_path(Path::new("orders.csv")),
            Err(SeedError::UnsupportedFormat(_))
        ));
        assert!(SeedFormat::from_path(Path::new("orders")).is_err());
    }

    #[test]
    fn test_duplicate_order_id_rejected() {
        let mut orders = demo_orders().unwrap();
        let mut dup = orders[0].clone();
        dup.items.clear();
        orders.push(dup);

        assert!(matches!(
            validate_ids(&orders),
            Err(SeedError::DuplicateOrderId(id)) if id == OrderId::new(1)
        ));
    }

    #[test]
    fn test_item_ids_must_be_unique_across_orders() {
        let mut orders = demo_orders().unwrap();
        let stolen = orders[0].items[0].clone();
        orders[2].items.push(stolen);

        assert!(matches!(
            validate_ids(&orders),
            Err(SeedError::DuplicateItemId(id)) if id == ItemId::new(1)
        ));
    }

    #[test]
    fn test_parse_json_seed() {
        let json = r#"[{
            "id": 10,
            "customer_name": "Ana",
            "phone_number": "+351 912 345 678",
            "status": "Delivered",
            "created_at": "2024-01-15",
            "items": []
        }]"#;

        let orders = parse_seed(json, SeedFormat::Json).unwrap();
        assert_eq!(orders[0].id, OrderId::new(10));
        assert!(orders[0].items.is_empty());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let yaml = r#"
- id: 1
  customer_name: X
  phone_number: "1"
  status: Shipped
  created_at: "2024-01-01"
  items: []
"#;
        assert!(matches!(
            parse_seed(yaml, SeedFormat::Yaml),
            Err(SeedError::Yaml(_))
        ));
    }

    #[test]
    fn test_form_param_statuses_accepted() {
        let yaml = r#"
- id: 1
  customer_name: X
  phone_number: "1"
  status: delivered
  created_at: "2024-01-01"
  items:
    - id: 7
      description: Mug
      quantity: 3
      status: pending
      image: "https://images.example.com/mug.jpg"
"#;
        let orders = parse_seed(yaml, SeedFormat::Yaml).unwrap();
        assert_eq!(orders[0].status, OrderStatus::Delivered);
        assert_eq!(orders[0].items[0].status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_load_seed_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(DEMO_SEED.as_bytes()).unwrap();

        let orders = load_seed_file(file.path()).await.unwrap();
        assert_eq!(orders.len(), 3);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = load_seed_file(Path::new("/nonexistent/orders.yaml")).await;
        assert!(matches!(result, Err(SeedError::Io { .. })));
    }

    #[tokio::test]
    async fn test_load_seed_defaults_to_demo() {
        let orders = load_seed(None).await.unwrap();
        assert_eq!(orders, demo_orders().unwrap());
    }
}
