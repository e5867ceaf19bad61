//! Authentication service.
//!
//! Sign-up, sign-in, and sign-out over the registered user collection and
//! the dual-scope session record. Credentials are plain text compared by
//! string equality: this is the local prototype stand-in the storage layout
//! defines, not a security boundary.

mod error;

pub use error::AuthError;

use smart_pantry_core::Email;

use crate::models::{RegisteredUser, SessionRecord, UserDraft};
use crate::repo::{RepositoryError, SessionRepository, UserRepository};
use crate::store::DualStore;

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    sessions: SessionRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a DualStore) -> Self {
        Self {
            users: UserRepository::new(store),
            sessions: SessionRepository::new(store),
        }
    }

    /// Register a new account.
    ///
    /// Validates all fields, rejects duplicate emails before any store
    /// mutation, and deliberately does NOT sign the user in: sign-up routes
    /// to sign-in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` for blank or malformed fields and
    /// `AuthError::EmailTaken` when the email is already registered.
    pub fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisteredUser, AuthError> {
        let draft = UserDraft::parse(username, email, password)?;

        let user = self
            .users
            .add(RegisteredUser::from_draft(draft))
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        tracing::info!(email = %user.email, "registered new user");
        Ok(user)
    }

    /// Sign in with email and password.
    ///
    /// On success the session record is written to both storage scopes and
    /// returned. Every failure mode — unparseable email, unknown email,
    /// wrong password, empty user collection — reports the same
    /// `InvalidCredentials`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when the credentials don't
    /// match a registered account.
    pub fn login(&self, email: &str, password: &str) -> Result<SessionRecord, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_email(&email)?
            .ok_or(AuthError::InvalidCredentials)?;

        if user.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        let session = SessionRecord::signed_in(user.email, user.username);
        self.sessions.set(&session)?;

        tracing::info!(email = %session.email, "user signed in");
        Ok(session)
    }

    /// Sign out, clearing the logged-in flag in both scopes.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the storage medium fails.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.sessions.clear()?;
        Ok(())
    }

    /// The current logged-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the storage medium fails.
    pub fn current_user(&self) -> Result<Option<SessionRecord>, AuthError> {
        Ok(self.sessions.current_user()?)
    }

    /// Whether a logged-in session exists.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.sessions.is_authenticated()
    }
}
