//! Meal plan route handlers.
//!
//! The grid is structurally fixed, so the only write operation is setting a
//! slot's recipe text.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use smart_pantry_core::MealSlotId;

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::MealPlanSlot;
use crate::repo::MealPlanRepository;
use crate::state::AppState;

/// Edit form data for one slot.
#[derive(Debug, Deserialize)]
pub struct RecipePayload {
    #[serde(default)]
    pub recipe: String,
}

/// List the full grid, Monday breakfast through Sunday dinner.
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<MealPlanSlot>>> {
    let slots = MealPlanRepository::new(state.store()).load_all()?;
    Ok(Json(slots))
}

/// Set a slot's recipe text. An empty string clears the slot.
pub async fn set_recipe(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<MealSlotId>,
    Json(payload): Json<RecipePayload>,
) -> Result<Json<MealPlanSlot>> {
    let slot = MealPlanRepository::new(state.store()).set_recipe(id, &payload.recipe)?;
    Ok(Json(slot))
}
