//! Order Desk admin library.
//!
//! This crate provides the orders page as a library, allowing it to be
//! tested and reused by the CLI.
//!
//! All state lives in memory for the lifetime of the process. Orders are
//! loaded from a seed file (or the embedded demo seed) at startup and every
//! change is lost on restart.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
