//! The orders page session: store plus modal selection.
//!
//! Each method is one user action. Handlers call exactly one of them per
//! request while holding the session lock, then re-render the page.

use url::Url;

use order_desk_core::{ItemId, Order, OrderId, OrderStatus};

use super::order_store::OrderStore;
use super::selection::{Selection, WorkingCopyChanges};

/// Prompt shown before an order is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this order?";

/// A synchronous yes/no prompt answered by the host UI.
pub trait Confirm {
    /// Ask `prompt`; `true` means the user agreed.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Store and selection state of one orders page session.
#[derive(Debug, Clone, Default)]
pub struct OrderDesk {
    store: OrderStore,
    selection: Selection,
}

impl OrderDesk {
    /// Start a session over seed orders with every modal closed.
    #[must_use]
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            store: OrderStore::new(orders),
            selection: Selection::default(),
        }
    }

    /// The order store.
    #[must_use]
    pub const fn store(&self) -> &OrderStore {
        &self.store
    }

    /// The modal selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The order in the details modal, resolved against the current store.
    ///
    /// `None` when the modal is closed or its order has since been deleted.
    #[must_use]
    pub fn detail_order(&self) -> Option<&Order> {
        self.selection
            .detail()
            .and_then(|id| self.store.get(id))
    }

    /// Open the details modal.
    pub fn view_details(&mut self, id: OrderId) {
        self.selection.view_details(id);
    }

    /// Close the details modal.
    pub fn close_details(&mut self) {
        self.selection.close_details();
    }

    /// Open the edit modal on a copy of the order.
    ///
    /// Returns `false` (and opens nothing) if the order does not exist.
    pub fn begin_edit(&mut self, id: OrderId) -> bool {
        match self.store.get(id) {
            Some(order) => {
                self.selection.begin_edit(order);
                true
            }
            None => false,
        }
    }

    /// Change fields of the working copy without committing.
    pub fn update_working_copy(&mut self, changes: WorkingCopyChanges) {
        self.selection.update_working_copy(changes);
    }

    /// Commit the working copy into the store and close the edit modal.
    ///
    /// No-op when no edit is in progress.
    pub fn save(&mut self) {
        if let Some(order) = self.selection.take_working_copy() {
            self.store.replace_order(&order);
        }
    }

    /// Close the edit modal without touching the store.
    pub fn cancel_edit(&mut self) {
        self.selection.cancel_edit();
    }

    /// Delete an order once `confirm` agrees to [`DELETE_PROMPT`].
    ///
    /// Returns whether an order was removed.
    pub fn delete_order(&mut self, id: OrderId, confirm: &impl Confirm) -> bool {
        if !confirm.confirm(DELETE_PROMPT) {
            tracing::debug!(order_id = %id, "Delete declined");
            return false;
        }
        self.store.delete_order(id)
    }

    /// Set the status of one item.
    pub fn set_item_status(&mut self, order_id: OrderId, item_id: ItemId, status: OrderStatus) {
        self.store.set_item_status(order_id, item_id, status);
    }

    /// Show an image full size.
    pub fn enlarge(&mut self, image: Url) {
        self.selection.enlarge(image);
    }

    /// Hide the enlarged image.
    pub fn dismiss_image(&mut self) {
        self.selection.dismiss_image();
    }
}
