//! Shopping list repository.

use smart_pantry_core::ShoppingItemId;

use super::{RepositoryError, load_collection, save_collection};
use crate::models::ShoppingItem;
use crate::store::{DualStore, keys};

/// Repository for the shopping list collection.
pub struct ShoppingItemRepository<'a> {
    store: &'a DualStore,
}

impl<'a> ShoppingItemRepository<'a> {
    /// Create a new shopping list repository.
    #[must_use]
    pub const fn new(store: &'a DualStore) -> Self {
        Self { store }
    }

    /// All shopping items in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn load_all(&self) -> Result<Vec<ShoppingItem>, RepositoryError> {
        load_collection(self.store.persistent(), keys::SHOPPING_ITEMS)
    }

    /// Overwrite the whole collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn save_all(&self, items: &[ShoppingItem]) -> Result<(), RepositoryError> {
        save_collection(self.store.persistent(), keys::SHOPPING_ITEMS, items)
    }

    /// Append a new item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn add(&self, item: ShoppingItem) -> Result<ShoppingItem, RepositoryError> {
        let mut items = self.load_all()?;
        items.push(item.clone());
        self.save_all(&items)?;
        Ok(item)
    }

    /// Flip an item's completed flag.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no item has the given id.
    pub fn toggle(&self, id: ShoppingItemId) -> Result<ShoppingItem, RepositoryError> {
        let mut items = self.load_all()?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(RepositoryError::NotFound)?;

        item.completed = !item.completed;
        let toggled = item.clone();
        self.save_all(&items)?;
        Ok(toggled)
    }

    /// Delete an item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no item has the given id.
    pub fn remove(&self, id: ShoppingItemId) -> Result<(), RepositoryError> {
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn open_store(dir: &tempfile::TempDir) -> DualStore {
        DualStore::open(dir.path()).unwrap()
    }

    #[test]
    fn test_add_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let repo = ShoppingItemRepository::new(&store);

        let eggs = repo.add(ShoppingItem::new("Eggs").unwrap()).unwrap();
        let bread = repo.add(ShoppingItem::new("Bread").unwrap()).unwrap();

        assert_eq!(repo.load_all().unwrap(), vec![eggs, bread]);
    }

    #[test]
    fn test_toggle_flips_back_and_forth() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let repo = ShoppingItemRepository::new(&store);

        let item = repo.add(ShoppingItem::new("Eggs").unwrap()).unwrap();

        assert!(repo.toggle(item.id).unwrap().completed);
        assert!(!repo.toggle(item.id).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let repo = ShoppingItemRepository::new(&store);

        assert!(matches!(
            repo.toggle(ShoppingItemId::new()),
            Err(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let repo = ShoppingItemRepository::new(&store);

        let item = repo.add(ShoppingItem::new("Eggs").unwrap()).unwrap();
        repo.remove(item.id).unwrap();
        assert!(repo.load_all().unwrap().is_empty());
    }
}
