//! Shopping list route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use smart_pantry_core::ShoppingItemId;

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::ShoppingItem;
use crate::repo::ShoppingItemRepository;
use crate::state::AppState;

/// Add form data for a shopping item.
#[derive(Debug, Deserialize)]
pub struct ShoppingItemPayload {
    #[serde(default)]
    pub name: String,
}

/// List shopping items in insertion order.
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<ShoppingItem>>> {
    let items = ShoppingItemRepository::new(state.store()).load_all()?;
    Ok(Json(items))
}

/// Add a new shopping item.
pub async fn add(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Json(payload): Json<ShoppingItemPayload>,
) -> Result<impl IntoResponse> {
    let item = ShoppingItem::new(&payload.name)?;
    let item = ShoppingItemRepository::new(state.store()).add(item)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Flip an item's completed flag.
pub async fn toggle(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<ShoppingItemId>,
) -> Result<Json<ShoppingItem>> {
    let item = ShoppingItemRepository::new(state.store()).toggle(id)?;
    Ok(Json(item))
}

/// Delete an item.
pub async fn remove(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<ShoppingItemId>,
) -> Result<StatusCode> {
    ShoppingItemRepository::new(state.store()).remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}
