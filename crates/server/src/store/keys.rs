//! Fixed storage key names.
//!
//! Collection keys hold a JSON array of records; the session key holds a
//! single JSON object; preference keys hold JSON scalars.

/// Food inventory collection.
pub const FOOD_ITEMS: &str = "foodItems";

/// Shopping list collection.
pub const SHOPPING_ITEMS: &str = "shoppingItems";

/// Weekly meal plan collection.
pub const MEAL_PLANS: &str = "mealPlans";

/// Recipe note collection.
pub const RECIPE_NOTES: &str = "recipeNotes";

/// Retired favorite-recipe collection, read only when [`RECIPE_NOTES`] is
/// absent.
pub const LEGACY_FAVORITE_RECIPES: &str = "favoriteRecipes";

/// Registered account collection.
pub const REGISTERED_USERS: &str = "registeredUsers";

/// Session record, duplicated in both storage scopes.
pub const SESSION: &str = "smartPantryUser";

/// High-contrast accessibility preference (boolean).
pub const PREF_HIGH_CONTRAST: &str = "smartPantry_highContrast";

/// Font-size accessibility preference (string).
pub const PREF_FONT_SIZE: &str = "smartPantry_fontSize";

/// Reduced-motion accessibility preference (boolean).
pub const PREF_REDUCED_MOTION: &str = "smartPantry_reducedMotion";
