//! Registered user repository.

use smart_pantry_core::Email;

use super::{RepositoryError, load_collection, save_collection};
use crate::models::RegisteredUser;
use crate::store::{DualStore, keys};

/// Repository for registered accounts.
pub struct UserRepository<'a> {
    store: &'a DualStore,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(store: &'a DualStore) -> Self {
        Self { store }
    }

    /// All registered users.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn load_all(&self) -> Result<Vec<RegisteredUser>, RepositoryError> {
        load_collection(self.store.persistent(), keys::REGISTERED_USERS)
    }

    /// Overwrite the whole collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn save_all(&self, users: &[RegisteredUser]) -> Result<(), RepositoryError> {
        save_collection(self.store.persistent(), keys::REGISTERED_USERS, users)
    }

    /// Look up a user by exact email match.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn find_by_email(&self, email: &Email) -> Result<Option<RegisteredUser>, RepositoryError> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|user| &user.email == email))
    }

    /// Append a new user, enforcing email uniqueness.
    ///
    /// The conflict check runs before any mutation, so a duplicate sign-up
    /// leaves the stored collection untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already
    /// registered.
    pub fn add(&self, user: RegisteredUser) -> Result<RegisteredUser, RepositoryError> {
        let mut users = self.load_all()?;
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(RepositoryError::Conflict(format!(
                "email already registered: {}",
                user.email
            )));
        }

        users.push(user.clone());
        self.save_all(&users)?;
        Ok(user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::UserDraft;

    fn open_store(dir: &tempfile::TempDir) -> DualStore {
        DualStore::open(dir.path()).unwrap()
    }

    fn user(name: &str, email: &str) -> RegisteredUser {
        RegisteredUser::from_draft(UserDraft::parse(name, email, "pw").unwrap())
    }

    #[test]
    fn test_add_and_find_by_email() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let repo = UserRepository::new(&store);

        repo.add(user("ana", "ana@example.com")).unwrap();

        let found = repo
            .find_by_email(&Email::parse("ana@example.com").unwrap())
            .unwrap();
        assert_eq!(found.map(|u| u.username), Some("ana".to_owned()));

        let missing = repo
            .find_by_email(&Email::parse("bob@example.com").unwrap())
            .unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_duplicate_email_rejected_without_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let repo = UserRepository::new(&store);

        repo.add(user("ana", "ana@example.com")).unwrap();
        let result = repo.add(user("imposter", "ana@example.com"));

        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
        let all = repo.load_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].username, "ana");
    }
}
