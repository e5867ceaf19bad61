//! Domain records and their validated input shapes.
//!
//! Every form payload accepted by the HTTP surface has an explicit draft
//! type here; drafts are parsed (and rejected) before any store mutation is
//! attempted, so a validation failure never leaves a partial write behind.

pub mod food;
pub mod meal_plan;
pub mod preferences;
pub mod recipe;
pub mod session;
pub mod shopping;
pub mod user;

pub use food::{FoodDraft, FoodItem};
pub use meal_plan::MealPlanSlot;
pub use preferences::{FontSize, Preferences};
pub use recipe::{FavoriteRecipe, RecipeNote};
pub use session::SessionRecord;
pub use shopping::ShoppingItem;
pub use user::{RegisteredUser, UserDraft};

use smart_pantry_core::{CategoryError, EmailError};
use thiserror::Error;

/// Errors produced while validating user-supplied record fields.
///
/// Surfaced as a field-level message; the attempted operation is aborted
/// before touching the store.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A mandatory field was empty or missing.
    #[error("{0} is required")]
    Required(&'static str),

    /// Email failed structural validation.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),

    /// Category is not one of the fixed set.
    #[error("invalid category: {0}")]
    Category(#[from] CategoryError),

    /// Expiration date is not a valid calendar date.
    #[error("invalid expiration date: {0}")]
    ExpirationDate(String),
}

/// Reject blank input for a mandatory field, returning the trimmed value.
pub(crate) fn required<'a>(
    value: &'a str,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  milk ", "name").ok(), Some("milk"));
    }

    #[test]
    fn test_required_rejects_blank() {
        assert!(matches!(
            required("   ", "name"),
            Err(ValidationError::Required("name"))
        ));
    }
}
