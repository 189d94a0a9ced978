//! HTTP route handlers for the order desk.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                             - Health check
//! GET  /                                   - Redirect to /orders
//!
//! # Orders page
//! GET  /orders                             - List plus any open modal
//!
//! # Details modal
//! POST /orders/{id}/details                - Open details
//! POST /orders/details/close               - Close details
//! POST /orders/{id}/items/{item_id}/status - Set an item's status
//!
//! # Edit modal
//! POST /orders/{id}/edit                   - Begin editing a copy
//! POST /orders/edit                        - Save the copy
//! POST /orders/edit/cancel                 - Discard the copy
//!
//! # Delete
//! GET  /orders/{id}/delete                 - Confirmation page
//! POST /orders/{id}/delete                 - Delete when confirm=yes
//!
//! # Notification
//! POST /orders/{id}/notify                 - 303 to the WhatsApp link
//!
//! # Enlarged image
//! POST /orders/images/enlarge              - Show an image full size
//! POST /orders/images/dismiss              - Hide it
//! ```
//!
//! Every POST redirects back to `/orders` (303 See Other), so a refresh
//! never repeats a transition.

pub mod orders;

use std::time::Duration;

use axum::{
    Router,
    http::{Request, Response},
    response::Redirect,
    routing::{get, post},
};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// Order desk routes, without state or layers.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/orders") }))
        .route("/orders", get(orders::index))
        // Details modal
        .route("/orders/{id}/details", post(orders::view_details))
        .route("/orders/details/close", post(orders::close_details))
        .route(
            "/orders/{id}/items/{item_id}/status",
            post(orders::set_item_status),
        )
        // Edit modal
        .route("/orders/{id}/edit", post(orders::begin_edit))
        .route("/orders/edit", post(orders::save_edit))
        .route("/orders/edit/cancel", post(orders::cancel_edit))
        // Delete
        .route(
            "/orders/{id}/delete",
            get(orders::confirm_delete).post(orders::delete),
        )
        // Notification
        .route("/orders/{id}/notify", post(orders::notify))
        // Enlarged image
        .route("/orders/images/enlarge", post(orders::enlarge_image))
        .route("/orders/images/dismiss", post(orders::dismiss_image))
}

/// Build the full application router with health check and request tracing.
///
/// Sentry layers are added by the binary, outermost.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(|response: &Response<_>, latency: Duration, span: &Span| {
                    span.record("status", response.status().as_u16());
                    span.record(
                        "latency_ms",
                        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                    );
                    DefaultOnResponse::default().on_response(response, latency, span);
                }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
