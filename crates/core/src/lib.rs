//! Order Desk Core - Shared types library.
//!
//! This crate provides the domain types used across all order desk components:
//! - `admin` - Server-rendered order management panel
//! - `cli` - Command-line tools for seed files and messaging links
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no state. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, statuses, roles, phone numbers, orders and items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
