//! HTTP route handlers for the pantry API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Health check (wired up in main)
//!
//! # Auth
//! POST /api/auth/register         - Sign up (does not sign in)
//! POST /api/auth/login            - Sign in, writes the session record
//! POST /api/auth/logout           - Sign out
//! GET  /api/auth/me               - Current session record
//!
//! # Food inventory (requires auth)
//! GET  /api/pantry?search=term    - Classified items, urgency-sorted
//! POST /api/pantry                - Add item
//! PUT  /api/pantry/{id}           - Replace all editable fields
//! DELETE /api/pantry/{id}         - Delete item
//!
//! # Shopping list (requires auth)
//! GET  /api/shopping              - List items
//! POST /api/shopping              - Add item
//! PUT  /api/shopping/{id}/toggle  - Flip completed flag
//! DELETE /api/shopping/{id}       - Delete item
//!
//! # Meal plan (requires auth)
//! GET  /api/meal-plan             - The fixed 7x3 grid
//! PUT  /api/meal-plan/{id}        - Set a slot's recipe text
//!
//! # Recipe notes (requires auth)
//! GET  /api/recipes               - List notes
//! POST /api/recipes               - Add note
//! DELETE /api/recipes/{id}        - Delete note
//!
//! # Preferences (requires auth)
//! GET  /api/preferences           - Accessibility preferences
//! PUT  /api/preferences           - Replace accessibility preferences
//! ```

pub mod auth;
pub mod meal_plan;
pub mod pantry;
pub mod preferences;
pub mod recipes;
pub mod shopping;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create the food inventory routes router.
pub fn pantry_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pantry::list).post(pantry::add))
        .route("/{id}", put(pantry::update).delete(pantry::remove))
}

/// Create the shopping list routes router.
pub fn shopping_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shopping::list).post(shopping::add))
        .route("/{id}/toggle", put(shopping::toggle))
        .route("/{id}", delete(shopping::remove))
}

/// Create the meal plan routes router.
pub fn meal_plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(meal_plan::list))
        .route("/{id}", put(meal_plan::set_recipe))
}

/// Create the recipe note routes router.
pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(recipes::list).post(recipes::add))
        .route("/{id}", delete(recipes::remove))
}

/// Create the preference routes router.
pub fn preference_routes() -> Router<AppState> {
    Router::new().route("/", get(preferences::show).put(preferences::update))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes())
        .nest("/api/pantry", pantry_routes())
        .nest("/api/shopping", shopping_routes())
        .nest("/api/meal-plan", meal_plan_routes())
        .nest("/api/recipes", recipe_routes())
        .nest("/api/preferences", preference_routes())
}
