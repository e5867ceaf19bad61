//! Recipe note repository.

use smart_pantry_core::RecipeNoteId;

use super::{RepositoryError, load_collection, save_collection};
use crate::models::{FavoriteRecipe, RecipeNote};
use crate::store::{DualStore, KeyValueStore, keys};

/// Repository for recipe notes.
///
/// Reads fall back to the retired `favoriteRecipes` key when the current key
/// has never been written, converting legacy records on the fly. The first
/// save after that writes the current key, which wins from then on.
pub struct RecipeNoteRepository<'a> {
    store: &'a DualStore,
}

impl<'a> RecipeNoteRepository<'a> {
    /// Create a new recipe note repository.
    #[must_use]
    pub const fn new(store: &'a DualStore) -> Self {
        Self { store }
    }

    /// All notes in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn load_all(&self) -> Result<Vec<RecipeNote>, RepositoryError> {
        let store = self.store.persistent();
        if store.get(keys::RECIPE_NOTES)?.is_some() {
            return load_collection(store, keys::RECIPE_NOTES);
        }

        let legacy: Vec<FavoriteRecipe> = load_collection(store, keys::LEGACY_FAVORITE_RECIPES)?;
        if !legacy.is_empty() {
            tracing::info!(count = legacy.len(), "converting legacy favorite recipes");
        }
        Ok(legacy.into_iter().map(RecipeNote::from).collect())
    }

    /// Overwrite the whole collection (always under the current key).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn save_all(&self, notes: &[RecipeNote]) -> Result<(), RepositoryError> {
        save_collection(self.store.persistent(), keys::RECIPE_NOTES, notes)
    }

    /// Seed the starter notes if the collection has never been populated
    /// (including via legacy data). Returns whether seeding happened.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn ensure_seeded(&self) -> Result<bool, RepositoryError> {
        if !self.load_all()?.is_empty() {
            return Ok(false);
        }
        self.save_all(&starter_notes())?;
        Ok(true)
    }

    /// Append a new note.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn add(&self, note: RecipeNote) -> Result<RecipeNote, RepositoryError> {
        let mut notes = self.load_all()?;
        notes.push(note.clone());
        self.save_all(&notes)?;
        Ok(note)
    }

    /// Delete a note. Notes are never edited in place; replacing one means
    /// deleting and recreating it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no note has the given id.
    pub fn remove(&self, id: RecipeNoteId) -> Result<(), RepositoryError> {
        let mut notes = self.load_all()?;
        let before = notes.len();
        notes.retain(|note| note.id != id);
        if notes.len() == before {
            return Err(RepositoryError::NotFound);
        }
        self.save_all(&notes)?;
        Ok(())
    }
}

/// The default note set written into an empty collection.
fn starter_notes() -> Vec<RecipeNote> {
    let defaults = [
        (
            "Classic Spaghetti",
            "Pasta, Tomato Sauce, Garlic, Onion, Ground Beef",
        ),
        (
            "Greek Salad",
            "Cucumber, Tomato, Feta Cheese, Olive Oil, Olives",
        ),
        ("Avocado Toast", "Bread, Avocado, Lemon Juice, Salt, Pepper"),
    ];

    defaults
        .into_iter()
        .filter_map(|(title, content)| RecipeNote::new(title, content).ok())
        .collect()
}
