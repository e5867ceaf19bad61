//! Accessibility preference repository.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::RepositoryError;
use crate::models::Preferences;
use crate::store::{DualStore, KeyValueStore, StoreError, keys};

/// Repository for the scalar preference entries.
///
/// Each preference lives under its own key so one malformed value only
/// costs that value its stored state, not the whole set.
pub struct PreferenceRepository<'a> {
    store: &'a DualStore,
}

impl<'a> PreferenceRepository<'a> {
    /// Create a new preference repository.
    #[must_use]
    pub const fn new(store: &'a DualStore) -> Self {
        Self { store }
    }

    /// Load all preferences, substituting defaults per value.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn load(&self) -> Result<Preferences, RepositoryError> {
        let store = self.store.persistent();
        let defaults = Preferences::default();

        Ok(Preferences {
            high_contrast: read_scalar(store, keys::PREF_HIGH_CONTRAST, defaults.high_contrast)?,
            font_size: read_scalar(store, keys::PREF_FONT_SIZE, defaults.font_size)?,
            reduced_motion: read_scalar(store, keys::PREF_REDUCED_MOTION, defaults.reduced_motion)?,
        })
    }

    /// Persist all preferences.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn save(&self, prefs: &Preferences) -> Result<(), RepositoryError> {
        let store = self.store.persistent();
        write_scalar(store, keys::PREF_HIGH_CONTRAST, &prefs.high_contrast)?;
        write_scalar(store, keys::PREF_FONT_SIZE, &prefs.font_size)?;
        write_scalar(store, keys::PREF_REDUCED_MOTION, &prefs.reduced_motion)?;
        Ok(())
    }
}

fn read_scalar<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    default: T,
) -> Result<T, RepositoryError> {
    let Some(raw) = store.get(key)? else {
        return Ok(default);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "stored preference is malformed, using default");
            Ok(default)
        }
    }
}

fn write_scalar<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), RepositoryError> {
    let raw = serde_json::to_string(value).map_err(StoreError::from)?;
    store.set(key, &raw)?;
    Ok(())
}
