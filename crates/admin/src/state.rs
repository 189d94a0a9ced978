//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use order_desk_core::Order;

use crate::config::AdminConfig;
use crate::services::OrderDesk;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the one orders page session; each
/// handler takes the write lock for a single transition so that a mutation
/// and the render that follows it never interleave with another request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    desk: RwLock<OrderDesk>,
}

impl AppState {
    /// Create application state over seed orders.
    #[must_use]
    pub fn new(config: AdminConfig, orders: Vec<Order>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                desk: RwLock::new(OrderDesk::new(orders)),
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Read access to the orders page session.
    pub async fn desk(&self) -> RwLockReadGuard<'_, OrderDesk> {
        self.inner.desk.read().await
    }

    /// Write access to the orders page session.
    pub async fn desk_mut(&self) -> RwLockWriteGuard<'_, OrderDesk> {
        self.inner.desk.write().await
    }
}
