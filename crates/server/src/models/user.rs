//! Registered user records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use smart_pantry_core::Email;

use super::{ValidationError, required};

/// A locally registered account.
///
/// `email` is the unique key within the collection. The password is stored
/// as plain text and compared by string equality: this is a local-only
/// prototype credential, not a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub username: String,
    pub email: Email,
    pub password: String,
    pub registered: DateTime<Utc>,
}

impl RegisteredUser {
    /// Materialize a validated sign-up draft, stamping the registration time.
    #[must_use]
    pub fn from_draft(draft: UserDraft) -> Self {
        Self {
            username: draft.username,
            email: draft.email,
            password: draft.password,
            registered: Utc::now(),
        }
    }
}

/// Validated sign-up form input.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub username: String,
    pub email: Email,
    pub password: String,
}

impl UserDraft {
    /// Parse raw sign-up fields into a draft.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when any field is blank or the email
    /// fails structural validation.
    pub fn parse(username: &str, email: &str, password: &str) -> Result<Self, ValidationError> {
        let username = required(username, "username")?.to_owned();
        let email = Email::parse(required(email, "email")?)?;
        if password.is_empty() {
            return Err(ValidationError::Required("password"));
        }

        Ok(Self {
            username,
            email,
            password: password.to_owned(),
        })
    }
}
