//! Authentication route handlers.
//!
//! Sign-up, sign-in, sign-out, and the current-session lookup the routing
//! collaborator uses as its gate.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use smart_pantry_core::Email;

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::SessionRecord;
use crate::services::auth::AuthService;
use crate::state::AppState;

// =============================================================================
// Payload Types
// =============================================================================

/// Sign-up form data.
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Sign-in form data.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Public view of a registered account (never includes the password).
#[derive(Debug, Serialize)]
pub struct RegisteredResponse {
    pub username: String,
    pub email: Email,
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle sign-up.
///
/// Creates the account but no session: the client routes to sign-in next.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.store());
    let user = auth.register(&payload.username, &payload.email, &payload.password)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisteredResponse {
            username: user.username,
            email: user.email,
        }),
    ))
}

/// Handle sign-in.
///
/// On success the session record is persisted to both scopes and returned.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<SessionRecord>> {
    let auth = AuthService::new(state.store());
    let session = auth.login(&payload.email, &payload.password)?;
    Ok(Json(session))
}

/// Handle sign-out.
pub async fn logout(State(state): State<AppState>) -> Result<StatusCode> {
    AuthService::new(state.store()).logout()?;
    Ok(StatusCode::NO_CONTENT)
}

/// The current session record; 401 when signed out.
pub async fn me(RequireAuth(session): RequireAuth) -> Json<SessionRecord> {
    Json(session)
}
