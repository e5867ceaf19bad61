//! Dual-scope session repository.

use super::RepositoryError;
use crate::models::SessionRecord;
use crate::store::{DualStore, KeyValueStore, StorageScope, keys};

/// Repository for the current session record.
///
/// The record is duplicated across both storage scopes. Which copy wins is a
/// single policy, [`reconcile`](Self::reconcile): the session scope is
/// checked first, then the persistent scope, and the first copy marked
/// logged-in is mirrored into the other scope.
pub struct SessionRepository<'a> {
    store: &'a DualStore,
}

/// Scope check order for reconciliation.
const SCOPE_ORDER: [StorageScope; 2] = [StorageScope::Session, StorageScope::Persistent];

impl<'a> SessionRepository<'a> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(store: &'a DualStore) -> Self {
        Self { store }
    }

    /// Read one scope's copy; malformed content reads as absent.
    fn read_scope(&self, scope: StorageScope) -> Result<Option<SessionRecord>, RepositoryError> {
        let Some(raw) = self.store.scope(scope).get(keys::SESSION)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(?scope, error = %e, "stored session record is malformed, ignoring");
                Ok(None)
            }
        }
    }

    fn write_scope(
        &self,
        scope: StorageScope,
        record: &SessionRecord,
    ) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(record).map_err(crate::store::StoreError::from)?;
        self.store.scope(scope).set(keys::SESSION, &raw)?;
        Ok(())
    }

    /// Find the winning logged-in record and mirror it into the other scope.
    ///
    /// Returns `None` when neither scope holds a logged-in record; records
    /// with the flag cleared never authenticate.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn reconcile(&self) -> Result<Option<SessionRecord>, RepositoryError> {
        for scope in SCOPE_ORDER {
            let Some(record) = self.read_scope(scope)? else {
                continue;
            };
            if !record.is_logged_in {
                continue;
            }

            let other = match scope {
                StorageScope::Session => StorageScope::Persistent,
                StorageScope::Persistent => StorageScope::Session,
            };
            self.write_scope(other, &record)?;
            return Ok(Some(record));
        }

        Ok(None)
    }

    /// The current logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn current_user(&self) -> Result<Option<SessionRecord>, RepositoryError> {
        self.reconcile()
    }

    /// Whether a logged-in record exists in either scope.
    ///
    /// Storage failures count as unauthenticated rather than erroring: the
    /// gate degrades to "signed out", never to a crash.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.reconcile(), Ok(Some(_)))
    }

    /// Write a record into both scopes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn set(&self, record: &SessionRecord) -> Result<(), RepositoryError> {
        for scope in SCOPE_ORDER {
            self.write_scope(scope, record)?;
        }
        Ok(())
    }

    /// Clear the logged-in flag in both scopes, keeping the identity fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn clear(&self) -> Result<(), RepositoryError> {
        for scope in SCOPE_ORDER {
            if let Some(record) = self.read_scope(scope)? {
                self.write_scope(scope, &record.signed_out())?;
            }
        }
        Ok(())
    }
}
