//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::PantryConfig;
use crate::store::{DualStore, StoreError};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; owns the configuration and the dual-scope
/// record store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: PantryConfig,
    store: DualStore,
}

impl AppState {
    /// Create a new application state, opening the store under the
    /// configured data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: PantryConfig) -> Result<Self, StoreError> {
        let store = DualStore::open(&config.data_dir)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, store }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &PantryConfig {
        &self.inner.config
    }

    /// Get a reference to the record store.
    #[must_use]
    pub fn store(&self) -> &DualStore {
        &self.inner.store
    }
}
