//! Session records.
//!
//! The session record is itself a stored domain entity, written to both
//! storage scopes so a sign-in survives the process while also being
//! visible to short-lived tools sharing the persistent store.

use serde::{Deserialize, Serialize};

use smart_pantry_core::Email;

/// The current user's sign-in state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub email: Email,
    pub username: String,
    pub is_logged_in: bool,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl SessionRecord {
    /// A freshly signed-in session for the given identity.
    #[must_use]
    pub const fn signed_in(email: Email, username: String) -> Self {
        Self {
            email,
            username,
            is_logged_in: true,
            avatar: None,
        }
    }

    /// This session with the logged-in flag cleared.
    #[must_use]
    pub fn signed_out(mut self) -> Self {
        self.is_logged_in = false;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email::parse("ana@example.com").unwrap()
    }

    #[test]
    fn test_signed_in_sets_flag() {
        let session = SessionRecord::signed_in(email(), "ana".to_owned());
        assert!(session.is_logged_in);
        assert_eq!(session.avatar, None);
    }

    #[test]
    fn test_signed_out_keeps_identity() {
        let session = SessionRecord::signed_in(email(), "ana".to_owned()).signed_out();
        assert!(!session.is_logged_in);
        assert_eq!(session.username, "ana");
    }

    #[test]
    fn test_serde_uses_camel_case_flag() {
        let session = SessionRecord::signed_in(email(), "ana".to_owned());
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["isLoggedIn"], true);
    }

    #[test]
    fn test_deserializes_without_avatar_field() {
        let raw = r#"{"email":"ana@example.com","username":"ana","isLoggedIn":true}"#;
        let session: SessionRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(session.avatar, None);
    }
}
