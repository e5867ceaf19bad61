//! Food inventory repository.

use smart_pantry_core::FoodItemId;

use super::{RepositoryError, load_collection, save_collection};
use crate::models::{FoodDraft, FoodItem};
use crate::store::{DualStore, keys};

/// Repository for the food inventory collection.
pub struct FoodItemRepository<'a> {
    store: &'a DualStore,
}

impl<'a> FoodItemRepository<'a> {
    /// Create a new food inventory repository.
    #[must_use]
    pub const fn new(store: &'a DualStore) -> Self {
        Self { store }
    }

    /// All inventory items in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn load_all(&self) -> Result<Vec<FoodItem>, RepositoryError> {
        load_collection(self.store.persistent(), keys::FOOD_ITEMS)
    }

    /// Overwrite the whole collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn save_all(&self, items: &[FoodItem]) -> Result<(), RepositoryError> {
        save_collection(self.store.persistent(), keys::FOOD_ITEMS, items)
    }

    /// Append a new item built from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn add(&self, draft: FoodDraft) -> Result<FoodItem, RepositoryError> {
        let item = FoodItem::from_draft(draft);
        let mut items = self.load_all()?;
        items.push(item.clone());
        self.save_all(&items)?;
        Ok(item)
    }

    /// Replace every editable field of an existing item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no item has the given id.
    pub fn update(&self, id: FoodItemId, draft: FoodDraft) -> Result<FoodItem, RepositoryError> {
        let mut items = self.load_all()?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(RepositoryError::NotFound)?;

        item.apply(draft);
        let updated = item.clone();
        self.save_all(&items)?;
        Ok(updated)
    }

    /// Delete an item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no item has the given id.
    pub fn remove(&self, id: FoodItemId) -> Result<(), RepositoryError> {
        let mut items = self.load_all()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(RepositoryError::NotFound);
        }
        self.save_all(&items)?;
        Ok(())
    }
}
