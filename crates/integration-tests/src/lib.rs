//! Integration tests for Smart Pantry.
//!
//! Every test runs against a real record store in a temporary directory, so
//! the whole stack — store, repositories, services, HTTP surface — is
//! exercised hermetically, with nothing to start or clean up by hand.
//!
//! # Test Categories
//!
//! - `auth_flow` - Sign-up/sign-in/sign-out through the auth service
//! - `inventory` - Food inventory CRUD, classification, and query ordering
//! - `seeding` - One-time seeding and legacy data conversion
//! - `session_scopes` - Dual-scope session reconciliation across "restarts"
//! - `api` - The axum surface, driven request by request

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::body::Body;
use axum::http::Request;
use axum::{Router, routing::get};

use smart_pantry_server::config::PantryConfig;
use smart_pantry_server::routes;
use smart_pantry_server::state::AppState;
use smart_pantry_server::store::DualStore;

/// A fresh application over a temporary data directory.
///
/// Keeps the directory alive for the lifetime of the context; dropping the
/// context deletes all stored data.
pub struct TestContext {
    pub state: AppState,
    data_dir: tempfile::TempDir,
}

impl TestContext {
    /// Create a context with an empty store.
    ///
    /// # Panics
    ///
    /// Panics when the temporary directory or store cannot be created;
    /// that's a broken test environment, not a test failure.
    #[must_use]
    pub fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create temp data dir");
        let config = PantryConfig {
            data_dir: data_dir.path().to_path_buf(),
            host: std::net::IpAddr::from([127, 0, 0, 1]),
            port: 0,
        };
        let state = AppState::new(config).expect("Failed to open the record store");

        Self { state, data_dir }
    }

    /// The record store behind this context.
    #[must_use]
    pub fn store(&self) -> &DualStore {
        self.state.store()
    }

    /// The full application router, as the server binary assembles it.
    #[must_use]
    pub fn app(&self) -> Router {
        Router::new()
            .route("/health", get(|| async { "ok" }))
            .merge(routes::routes())
            .with_state(self.state.clone())
    }

    /// Reopen the persistent store at the same directory, as a new process
    /// would: the session scope starts empty, the file survives.
    ///
    /// # Panics
    ///
    /// Panics when the store cannot be reopened.
    #[must_use]
    pub fn reopen(&self) -> DualStore {
        DualStore::open(self.data_dir.path()).expect("Failed to reopen the record store")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a JSON request.
///
/// # Panics
///
/// Panics on an invalid URI, which is a test bug.
#[must_use]
pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Build a bodyless request.
///
/// # Panics
///
/// Panics on an invalid URI, which is a test bug.
#[must_use]
pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Extract a JSON body from a response.
///
/// # Panics
///
/// Panics when the body is not valid JSON.
pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}
