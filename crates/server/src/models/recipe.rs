//! Recipe note records.

use serde::{Deserialize, Serialize};

use smart_pantry_core::RecipeNoteId;

use super::{ValidationError, required};

/// A saved recipe note.
///
/// Notes are created and deleted, never edited in place: the UI's edit
/// gesture is delete-and-recreate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeNote {
    pub id: RecipeNoteId,
    pub title: String,
    pub content: String,
}

impl RecipeNote {
    /// Create a new note.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] when the title is blank.
    pub fn new(title: &str, content: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: RecipeNoteId::new(),
            title: required(title, "title")?.to_owned(),
            content: content.to_owned(),
        })
    }
}

/// The retired favorite-recipe shape, still found under the legacy storage
/// key in stores written by earlier versions.
///
/// Legacy ids were arbitrary strings, so conversion always assigns a fresh
/// id and folds the ingredient list into the note body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FavoriteRecipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
}

impl From<FavoriteRecipe> for RecipeNote {
    fn from(legacy: FavoriteRecipe) -> Self {
        Self {
            id: RecipeNoteId::new(),
            title: legacy.name,
            content: legacy.ingredients.join(", "),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_blank_title() {
        assert!(matches!(
            RecipeNote::new("", "whatever"),
            Err(ValidationError::Required("title"))
        ));
    }

    #[test]
    fn test_content_may_be_empty() {
        let note = RecipeNote::new("Toast", "").unwrap();
        assert_eq!(note.content, "");
    }

    #[test]
    fn test_legacy_conversion_joins_ingredients() {
        let legacy = FavoriteRecipe {
            id: "2".to_owned(),
            name: "Greek Salad".to_owned(),
            ingredients: vec![
                "Cucumber".to_owned(),
                "Tomato".to_owned(),
                "Feta Cheese".to_owned(),
            ],
        };

        let note = RecipeNote::from(legacy);
        assert_eq!(note.title, "Greek Salad");
        assert_eq!(note.content, "Cucumber, Tomato, Feta Cheese");
    }
}
