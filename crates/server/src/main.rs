//! Smart Pantry server - local pantry organizer API.
//!
//! This binary serves the pantry API on port 3000 by default.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON API
//! - A dual-scope key-value record store: an in-process session scope and a
//!   JSON file under the data directory that survives restarts
//! - Repositories own all collection access; every mutation rewrites the
//!   whole stored collection
//! - The session gate re-reads and reconciles both storage scopes on every
//!   guarded request
//!
//! All state is local to this machine. There is no database server and no
//! remote API behind this process.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use smart_pantry_server::config::PantryConfig;
use smart_pantry_server::repo::{MealPlanRepository, RecipeNoteRepository};
use smart_pantry_server::routes;
use smart_pantry_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "smart_pantry_server=info,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment
    let config = PantryConfig::from_env().expect("Failed to load configuration");

    // Build application state (opens the record store)
    let state = AppState::new(config.clone()).expect("Failed to open the record store");
    tracing::info!(data_dir = %config.data_dir.display(), "record store opened");

    // Seed the fixed collections on first use
    seed_defaults(&state);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("smart pantry listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Seed the meal plan grid and starter recipe notes when first observed
/// empty. Runs once at startup, decoupled from any request handling.
fn seed_defaults(state: &AppState) {
    match MealPlanRepository::new(state.store()).ensure_seeded() {
        Ok(true) => tracing::info!("seeded the empty meal plan grid"),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "could not seed the meal plan grid"),
    }

    match RecipeNoteRepository::new(state.store()).ensure_seeded() {
        Ok(true) => tracing::info!("seeded the starter recipe notes"),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "could not seed the recipe notes"),
    }
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
