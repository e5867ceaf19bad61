//! Authentication error types.

use thiserror::Error;

use crate::models::ValidationError;
use crate::repo::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. One variant on purpose: the message
    /// never reveals which part was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Sign-up email collides with an existing account.
    #[error("an account with this email already exists")]
    EmailTaken,

    /// A sign-up field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Repository/store error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}
