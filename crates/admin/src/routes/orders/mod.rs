//! Orders page: list, details/edit/image modals and per-order actions.

mod actions;
mod list;
pub mod types;

pub use actions::{
    ConfirmDeleteTemplate, DeleteInput, EditOrderInput, EnlargeInput, FormConfirmation,
    ItemStatusInput, begin_edit, cancel_edit, close_details, confirm_delete, delete,
    dismiss_image, enlarge_image, notify, save_edit, set_item_status, view_details,
};
pub use list::{OrdersIndexTemplate, index};
