//! Repositories over the record store.
//!
//! One repository per collection, each borrowing the [`DualStore`] it was
//! handed (dependency-passed, never ambient). A collection is persisted as
//! one JSON array under its fixed key: `load_all` reads and parses the whole
//! array, `save_all` rewrites it, and every mutation ends in a `save_all` so
//! the store and the caller's view never diverge.
//!
//! Malformed stored content is deliberately not an error: it is logged and
//! read as the empty collection, and the next save repairs the key.

pub mod food;
pub mod meal_plan;
pub mod preferences;
pub mod recipes;
pub mod session;
pub mod shopping;
pub mod users;

pub use food::FoodItemRepository;
pub use meal_plan::MealPlanRepository;
pub use preferences::PreferenceRepository;
pub use recipes::RecipeNoteRepository;
pub use session::SessionRepository;
pub use shopping::ShoppingItemRepository;
pub use users::UserRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::store::{KeyValueStore, StoreError};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage medium failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Requested record was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Read and parse a whole collection, defaulting to empty.
///
/// Absent and malformed values both yield `Ok(vec![])`; only a failing
/// storage medium is an error.
pub(crate) fn load_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, RepositoryError> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(records) => Ok(records),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored collection is malformed, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Serialize and overwrite a whole collection.
pub(crate) fn save_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    records: &[T],
) -> Result<(), RepositoryError> {
    let raw = serde_json::to_string(records).map_err(StoreError::from)?;
    store.set(key, &raw)?;
    Ok(())
}
