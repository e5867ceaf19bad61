//! The persistent record store.
//!
//! A small key-value abstraction over local storage. Values are opaque
//! strings (the repositories put JSON in them); keys are fixed names from
//! [`keys`]. Two durability scopes exist:
//!
//! - **Session** - lives for the current process only ([`MemoryStore`])
//! - **Persistent** - survives restarts ([`JsonFileStore`])
//!
//! There are no transactions: concurrent writers race and the last write
//! wins. Serialization, key naming, and scope reconciliation are all the
//! callers' responsibility; the store itself only moves strings.

pub mod file;
pub mod keys;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::path::Path;

use thiserror::Error;

/// Errors raised at the store boundary.
///
/// Note that *malformed stored content* is not an error here: readers treat
/// it as absent data and fall back to their default. These errors cover the
/// storage medium itself.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded for storage.
    #[error("storage encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durability tier for stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageScope {
    /// Cleared when the process exits.
    Session,
    /// Survives restarts.
    Persistent,
}

/// Minimal get/set contract shared by both scopes.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] only when the storage medium fails; an absent
    /// key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the storage medium fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Both storage scopes bundled as one handle.
///
/// This is the only storage object the rest of the system sees; components
/// receive it by reference rather than reaching for ambient globals.
pub struct DualStore {
    session: MemoryStore,
    persistent: JsonFileStore,
}

impl DualStore {
    /// Open the store rooted at `data_dir`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the data directory cannot be created.
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        std::fs::create_dir_all(data_dir)?;
        Ok(Self {
            session: MemoryStore::new(),
            persistent: JsonFileStore::new(data_dir.join(file::STORE_FILE_NAME)),
        })
    }

    /// The store for the given scope.
    #[must_use]
    pub fn scope(&self, scope: StorageScope) -> &dyn KeyValueStore {
        match scope {
            StorageScope::Session => &self.session,
            StorageScope::Persistent => &self.persistent,
        }
    }

    /// The process-lifetime store.
    #[must_use]
    pub fn session(&self) -> &dyn KeyValueStore {
        &self.session
    }

    /// The restart-surviving store.
    #[must_use]
    pub fn persistent(&self) -> &dyn KeyValueStore {
        &self.persistent
    }
}
