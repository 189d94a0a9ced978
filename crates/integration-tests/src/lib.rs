//! Integration tests for the order desk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p order-desk-integration-tests
//! ```
//!
//! No external services are needed: each test starts the admin router on an
//! ephemeral local port with its own in-memory session and talks to it over
//! HTTP.
//!
//! # Test Categories
//!
//! - `order_desk` - Session behavior through the library API
//! - `orders_page` - Routes, rendering and role gating over HTTP

use std::net::SocketAddr;

use reqwest::{Client, Response, redirect::Policy};
use tokio::{net::TcpListener, task::JoinHandle};

use order_desk_admin::config::AdminConfig;
use order_desk_admin::routes;
use order_desk_admin::seed::demo_orders;
use order_desk_admin::state::AppState;
use order_desk_core::Order;

/// Header carrying the role, as set by the auth proxy.
pub use order_desk_admin::middleware::ROLE_HEADER;

/// A running admin server bound to `127.0.0.1:0`.
///
/// Redirects are not followed so tests can assert on 303 targets. The server
/// task is aborted on drop.
pub struct TestServer {
    addr: SocketAddr,
    client: Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server over the demo orders with default configuration.
    pub async fn start() -> Self {
        let orders = demo_orders().expect("Demo seed should parse");
        Self::with(AdminConfig::default(), orders).await
    }

    /// Start a server with explicit configuration and seed orders.
    pub async fn with(config: AdminConfig, orders: Vec<Order>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener
            .local_addr()
            .expect("Failed to read test listener address");

        let app = routes::app(AppState::new(config, orders));
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server error");
        });

        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            addr,
            client,
            handle,
        }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// The underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    /// `GET path`.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// `POST path` with a form body.
    pub async fn post(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// Body of the orders page as seen with no role header.
    pub async fn page(&self) -> String {
        self.get("/orders")
            .await
            .text()
            .await
            .expect("Failed to read orders page")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
