//! Authentication extractors.
//!
//! The session gate for guarded routes: every extraction re-reads the
//! session record from both storage scopes and reconciles them, so a
//! sign-in recorded only persistently (e.g. before a restart) still
//! authenticates.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

use crate::models::SessionRecord;
use crate::repo::SessionRepository;
use crate::state::AppState;

/// Extractor that requires a signed-in user.
///
/// # Example
///
/// ```rust,ignore
/// async fn guarded_handler(
///     RequireAuth(session): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", session.username)
/// }
/// ```
pub struct RequireAuth(pub SessionRecord);

/// Error returned when authentication is required but absent.
pub enum AuthRejection {
    /// No logged-in session record in either scope.
    Unauthorized,
    /// The session record could not be read at all.
    Internal,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "error": "authentication required" })),
            )
                .into_response(),
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let sessions = SessionRepository::new(state.store());
        match sessions.reconcile() {
            Ok(Some(record)) => Ok(Self(record)),
            Ok(None) => Err(AuthRejection::Unauthorized),
            Err(e) => {
                tracing::error!(error = %e, "session gate failed to read the store");
                Err(AuthRejection::Internal)
            }
        }
    }
}

/// Extractor that optionally gets the current session.
///
/// Unlike [`RequireAuth`], this never rejects the request.
pub struct OptionalAuth(pub Option<SessionRecord>);

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let sessions = SessionRepository::new(state.store());
        Ok(Self(sessions.reconcile().unwrap_or_default()))
    }
}
