//! File-backed store backing the persistent scope.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use super::{KeyValueStore, StoreError};

/// File name of the persistent store inside the data directory.
pub const STORE_FILE_NAME: &str = "pantry.json";

/// A key-value store persisted as a single JSON object file.
///
/// Every write rewrites the whole file via a sibling temp file and rename;
/// every read re-reads it, so external writers (the CLI against a stopped
/// server's data directory) are picked up without coordination. A missing
/// file reads as empty; a malformed file is logged and also reads as empty
/// rather than failing the caller.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes the read-modify-write cycle in `set`
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is not created until the first write.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "persistent store file is malformed, treating as empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, raw)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let mut entries = self.read_entries()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join(STORE_FILE_NAME))
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("foodItems").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("foodItems", r#"[{"name":"Milk"}]"#).unwrap();
        assert_eq!(
            store.get("foodItems").unwrap().as_deref(),
            Some(r#"[{"name":"Milk"}]"#)
        );
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).set("shoppingItems", "[]").unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.get("shoppingItems").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_malformed_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(path);
        assert_eq!(store.get("foodItems").unwrap(), None);
    }

    #[test]
    fn test_write_repairs_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        std::fs::write(&path, "garbage").unwrap();

        let store = JsonFileStore::new(path);
        store.set("foodItems", "[]").unwrap();
        assert_eq!(store.get("foodItems").unwrap().as_deref(), Some("[]"));
    }
}
