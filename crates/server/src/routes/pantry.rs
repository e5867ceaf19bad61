//! Food inventory route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use smart_pantry_core::{FoodItemId, FreshnessStatus, classify};

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::{FoodDraft, FoodItem};
use crate::repo::FoodItemRepository;
use crate::state::AppState;

// =============================================================================
// Payload Types
// =============================================================================

/// Add/edit form data for a food item. All fields arrive as raw strings and
/// are validated into a draft before anything is written.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub expiration_date: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl FoodItemPayload {
    fn into_draft(self) -> std::result::Result<FoodDraft, crate::models::ValidationError> {
        FoodDraft::parse(
            &self.name,
            &self.category,
            &self.expiration_date,
            self.quantity,
            self.notes,
        )
    }
}

/// Search parameter for the inventory listing.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
}

/// An inventory item together with its freshness classification.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedItem {
    #[serde(flatten)]
    pub item: FoodItem,
    pub status: FreshnessStatus,
    pub status_text: String,
}

impl ClassifiedItem {
    fn new(item: FoodItem, today: chrono::NaiveDate) -> Self {
        let freshness = classify(item.expiration_date, today);
        Self {
            item,
            status: freshness.status,
            status_text: freshness.text,
        }
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

// =============================================================================
// Handlers
// =============================================================================

/// List inventory items matching the search term, most urgent first, each
/// with its classification attached.
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ClassifiedItem>>> {
    let repo = FoodItemRepository::new(state.store());
    let items = repo.load_all()?;

    let today = today();
    let classified = crate::query::query_sorted(&items, &query.search, today)
        .into_iter()
        .map(|item| ClassifiedItem::new(item, today))
        .collect();

    Ok(Json(classified))
}

/// Add a new inventory item.
pub async fn add(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Json(payload): Json<FoodItemPayload>,
) -> Result<impl IntoResponse> {
    let draft = payload.into_draft()?;
    let item = FoodItemRepository::new(state.store()).add(draft)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace every editable field of an item.
pub async fn update(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<FoodItemId>,
    Json(payload): Json<FoodItemPayload>,
) -> Result<Json<FoodItem>> {
    let draft = payload.into_draft()?;
    let item = FoodItemRepository::new(state.store()).update(id, draft)?;
    Ok(Json(item))
}

/// Delete an item.
pub async fn remove(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<FoodItemId>,
) -> Result<StatusCode> {
    FoodItemRepository::new(state.store()).remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}
