//! HTTP middleware and extractors for admin.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost)
//! 2. `TraceLayer` (request tracing with status and latency)
//!
//! Authentication is done by the fronting proxy; [`auth::CurrentRole`] reads
//! the role it forwards.

pub mod auth;

pub use auth::{CurrentRole, ROLE_HEADER};
