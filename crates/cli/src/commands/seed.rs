//! Seed file validation.
//!
//! Runs the same parsing and ID checks the admin server runs at startup, so
//! a bad seed file is caught before deploy rather than on boot.

use std::path::Path;

use tracing::info;

use order_desk_admin::seed::{SeedError, load_seed_file};

/// Parse and validate a seed file, then summarize it.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML/JSON for
/// the order shape, or repeats an order or item ID.
pub async fn check(path: &Path) -> Result<(), SeedError> {
    info!(path = %path.display(), "Checking seed file");

    let orders = load_seed_file(path).await?;
    let items: usize = orders.iter().map(|order| order.items.len()).sum();

    info!("Seed file is valid");
    info!("  Orders: {}", orders.len());
    info!("  Items: {}", items);

    Ok(())
}
