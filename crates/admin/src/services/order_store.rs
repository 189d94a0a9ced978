//! In-memory order store.
//!
//! The store is the single source of truth the orders page renders from.
//! Every operation is total: unknown IDs are silent no-ops, never errors.

use tracing::{debug, warn};

use order_desk_core::{ItemId, Order, OrderId, OrderStatus};

/// Ordered collection of orders.
///
/// Insertion order is display order and is preserved by every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    /// Create a store from seed orders.
    #[must_use]
    pub const fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Current orders in display order.
    #[must_use]
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    /// Look up an order by ID.
    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Number of orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether the store holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Replace every order whose ID matches `updated.id`.
    ///
    /// Non-matching orders keep their value and position. Does nothing if no
    /// order matches.
    pub fn replace_order(&mut self, updated: &Order) {
        let mut replaced = false;
        for order in self.orders.iter_mut().filter(|o| o.id == updated.id) {
            order.clone_from(updated);
            replaced = true;
        }

        if replaced {
            debug!(order_id = %updated.id, "Order replaced");
        } else {
            warn!(order_id = %updated.id, "Replace ignored: no order with this ID");
        }
    }

    /// Remove an order together with its items.
    ///
    /// Idempotent. Returns whether an order was removed.
    pub fn delete_order(&mut self, id: OrderId) -> bool {
        let before = self.orders.len();
        self.orders.retain(|order| order.id != id);
        let removed = self.orders.len() != before;

        if removed {
            debug!(order_id = %id, "Order deleted");
        } else {
            debug!(order_id = %id, "Delete ignored: no order with this ID");
        }
        removed
    }

    /// Set the status of one item of one order.
    ///
    /// Does nothing if either ID is unknown.
    pub fn set_item_status(&mut self, order_id: OrderId, item_id: ItemId, status: OrderStatus) {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            warn!(order_id = %order_id, item_id = %item_id, "Item status ignored: unknown order");
            return;
        };

        match order.item_mut(item_id) {
            Some(item) => {
                item.status = status;
                debug!(order_id = %order_id, item_id = %item_id, status = %status, "Item status set");
            }
            None => {
                warn!(order_id = %order_id, item_id = %item_id, "Item status ignored: unknown item");
            }
        }
    }
}

impl From<Vec<Order>> for OrderStore {
    fn from(orders: Vec<Order>) -> Self {
        Self::new(orders)
    }
}
