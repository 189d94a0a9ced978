//! Modal selection state for the orders page.
//!
//! Three independent slots, all empty initially:
//!
//! - detail selection: the order shown in the details modal, held by ID so the
//!   modal always renders the current store value
//! - edit working copy: a detached clone of the order being edited
//! - enlarged image: the image shown full size

use url::Url;

use order_desk_core::{Order, OrderId, OrderStatus, PhoneNumber};

/// Field changes applied to the edit working copy.
///
/// `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingCopyChanges {
    pub customer_name: Option<String>,
    pub phone_number: Option<PhoneNumber>,
    pub status: Option<OrderStatus>,
}

/// Selection slots of one UI session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    detail: Option<OrderId>,
    working_copy: Option<Order>,
    enlarged_image: Option<Url>,
}

impl Selection {
    /// Order ID currently shown in the details modal.
    #[must_use]
    pub const fn detail(&self) -> Option<OrderId> {
        self.detail
    }

    /// Open the details modal for an order.
    pub fn view_details(&mut self, id: OrderId) {
        self.detail = Some(id);
    }

    /// Close the details modal.
    pub fn close_details(&mut self) {
        self.detail = None;
    }

    /// The edit working copy, if an edit is in progress.
    #[must_use]
    pub const fn working_copy(&self) -> Option<&Order> {
        self.working_copy.as_ref()
    }

    /// Whether the edit modal is open.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.working_copy.is_some()
    }

    /// Start editing a detached copy of `order`.
    ///
    /// Replaces any edit already in progress.
    pub fn begin_edit(&mut self, order: &Order) {
        self.working_copy = Some(order.clone());
    }

    /// Apply field changes to the working copy. No-op when not editing.
    pub fn update_working_copy(&mut self, changes: WorkingCopyChanges) {
        let Some(copy) = self.working_copy.as_mut() else {
            return;
        };
        if let Some(name) = changes.customer_name {
            copy.customer_name = name;
        }
        if let Some(phone) = changes.phone_number {
            copy.phone_number = phone;
        }
        if let Some(status) = changes.status {
            copy.status = status;
        }
    }

    /// Close the edit modal and hand back the working copy for committing.
    pub fn take_working_copy(&mut self) -> Option<Order> {
        self.working_copy.take()
    }

    /// Discard the working copy.
    pub fn cancel_edit(&mut self) {
        self.working_copy = None;
    }

    /// Image currently enlarged.
    #[must_use]
    pub const fn enlarged_image(&self) -> Option<&Url> {
        self.enlarged_image.as_ref()
    }

    /// Show an image full size.
    pub fn enlarge(&mut self, image: Url) {
        self.enlarged_image = Some(image);
    }

    /// Hide the enlarged image.
    pub fn dismiss_image(&mut self) {
        self.enlarged_image = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_orders;

    #[test]
    fn test_initial_state_is_empty() {
        let selection = Selection::default();
        assert!(selection.detail().is_none());
        assert!(!selection.is_editing());
        assert!(selection.enlarged_image().is_none());
    }

    #[test]
    fn test_details_open_and_close() {
        let mut selection = Selection::default();
        selection.view_details(OrderId::new(2));
        assert_eq!(selection.detail(), Some(OrderId::new(2)));
        selection.close_details();
        assert!(selection.detail().is_none());
    }

    #[test]
    fn test_working_copy_is_detached() {
        let orders = demo_orders().unwrap();
        let mut selection = Selection::default();
        selection.begin_edit(&orders[0]);
        selection.update_working_copy(WorkingCopyChanges {
            customer_name: Some("Johnny".to_string()),
            ..WorkingCopyChanges::default()
        });

        assert_eq!(orders[0].customer_name, "John Doe");
        assert_eq!(selection.working_copy().unwrap().customer_name, "Johnny");
    }

    #[test]
    fn test_update_without_edit_is_noop() {
        let mut selection = Selection::default();
        selection.update_working_copy(WorkingCopyChanges {
            status: Some(OrderStatus::Delivered),
            ..WorkingCopyChanges::default()
        });
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn test_take_and_cancel_clear_edit() {
        let orders = demo_orders().unwrap();
        let mut selection = Selection::default();

        selection.begin_edit(&orders[1]);
        assert_eq!(selection.take_working_copy(), Some(orders[1].clone()));
        assert!(!selection.is_editing());

        selection.begin_edit(&orders[1]);
        selection.cancel_edit();
        assert!(selection.take_working_copy().is_none());
    }

    #[test]
    fn test_slots_are_independent() {
        let orders = demo_orders().unwrap();
        let image = orders[0].items[0].image.clone();
        let mut selection = Selection::default();

        selection.view_details(OrderId::new(1));
        selection.begin_edit(&orders[2]);
        selection.enlarge(image.clone());

        selection.dismiss_image();
        assert_eq!(selection.detail(), Some(OrderId::new(1)));
        assert!(selection.is_editing());

        selection.close_details();
        assert!(selection.is_editing());
        assert!(selection.enlarged_image().is_none());

        selection.enlarge(image.clone());
        selection.cancel_edit();
        assert_eq!(selection.enlarged_image(), Some(&image));
    }
}
