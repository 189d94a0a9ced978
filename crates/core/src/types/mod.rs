//! Core types for the order desk.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod order;
pub mod phone;
pub mod status;

pub use id::*;
pub use order::{Item, Order};
pub use phone::PhoneNumber;
pub use status::*;
