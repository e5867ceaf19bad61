//! Accessibility preference route handlers.

use axum::{Json, extract::State};

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::Preferences;
use crate::repo::PreferenceRepository;
use crate::state::AppState;

/// Current preferences, with defaults for anything unset.
pub async fn show(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Preferences>> {
    let prefs = PreferenceRepository::new(state.store()).load()?;
    Ok(Json(prefs))
}

/// Replace all preferences. The payload is fully typed, so an unknown font
/// size is rejected before anything is written.
pub async fn update(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Json(prefs): Json<Preferences>,
) -> Result<Json<Preferences>> {
    PreferenceRepository::new(state.store()).save(&prefs)?;
    Ok(Json(prefs))
}
