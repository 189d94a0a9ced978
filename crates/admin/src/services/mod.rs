//! Business logic services for the order desk.
//!
//! # Services
//!
//! - `order_store` - The authoritative in-memory order collection
//! - `selection` - Which order is being viewed or edited, and the enlarged image
//! - `order_desk` - Page session combining the store and selection
//! - `notify` - WhatsApp status notification links

pub mod notify;
pub mod order_desk;
pub mod order_store;
pub mod selection;

pub use notify::{compose_notification, notification_message, order_notification};
pub use order_desk::{Confirm, DELETE_PROMPT, OrderDesk};
pub use order_store::OrderStore;
pub use selection::{Selection, WorkingCopyChanges};
