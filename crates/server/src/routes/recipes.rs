//! Recipe note route handlers.
//!
//! Notes have no edit endpoint: replacing one is delete-and-recreate.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use smart_pantry_core::RecipeNoteId;

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::RecipeNote;
use crate::repo::RecipeNoteRepository;
use crate::state::AppState;

/// Add form data for a recipe note.
#[derive(Debug, Deserialize)]
pub struct RecipeNotePayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// List notes in insertion order.
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<RecipeNote>>> {
    let notes = RecipeNoteRepository::new(state.store()).load_all()?;
    Ok(Json(notes))
}

/// Add a new note.
pub async fn add(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Json(payload): Json<RecipeNotePayload>,
) -> Result<impl IntoResponse> {
    let note = RecipeNote::new(&payload.title, &payload.content)?;
    let note = RecipeNoteRepository::new(state.store()).add(note)?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// Delete a note.
pub async fn remove(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<RecipeNoteId>,
) -> Result<StatusCode> {
    RecipeNoteRepository::new(state.store()).remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}
