//! Weekly meal plan repository.

use smart_pantry_core::MealSlotId;

use super::{RepositoryError, load_collection, save_collection};
use crate::models::MealPlanSlot;
use crate::models::meal_plan::empty_week;
use crate::store::{DualStore, keys};

/// Repository for the meal plan grid.
///
/// The grid is structurally fixed: `ensure_seeded` creates it once and the
/// only mutation afterwards is setting a slot's recipe text.
pub struct MealPlanRepository<'a> {
    store: &'a DualStore,
}

impl<'a> MealPlanRepository<'a> {
    /// Create a new meal plan repository.
    #[must_use]
    pub const fn new(store: &'a DualStore) -> Self {
        Self { store }
    }

    /// All slots, day-major (Monday breakfast through Sunday dinner).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn load_all(&self) -> Result<Vec<MealPlanSlot>, RepositoryError> {
        load_collection(self.store.persistent(), keys::MEAL_PLANS)
    }

    /// Overwrite the whole collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn save_all(&self, slots: &[MealPlanSlot]) -> Result<(), RepositoryError> {
        save_collection(self.store.persistent(), keys::MEAL_PLANS, slots)
    }

    /// Seed the empty 7x3 grid if the collection has never been populated.
    ///
    /// Idempotent: an already-populated collection is left untouched, never
    /// merged with defaults. Returns whether seeding happened.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the storage medium fails.
    pub fn ensure_seeded(&self) -> Result<bool, RepositoryError> {
        if !self.load_all()?.is_empty() {
            return Ok(false);
        }
        self.save_all(&empty_week())?;
        Ok(true)
    }

    /// Set the recipe text of one slot.
    ///
    /// This is the only slot mutation that exists; day and meal are fixed at
    /// seeding time.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no slot has the given id.
    pub fn set_recipe(&self, id: MealSlotId, recipe: &str) -> Result<MealPlanSlot, RepositoryError> {
        let mut slots = self.load_all()?;
        let slot = slots
            .iter_mut()
            .find(|slot| slot.id == id)
            .ok_or(RepositoryError::NotFound)?;

        slot.recipe = recipe.trim().to_owned();
        let updated = slot.clone();
        self.save_all(&slots)?;
        Ok(updated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use smart_pantry_core::{MealOfDay, Weekday};

    fn open_store(dir: &tempfile::TempDir) -> DualStore {
        DualStore::open(dir.path()).unwrap()
    }

    #[test]
    fn test_seeds_empty_grid_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let repo = MealPlanRepository::new(&store);

        assert!(repo.ensure_seeded().unwrap());
        let first = repo.load_all().unwrap();
        assert_eq!(first.len(), 21);

        // Second call is a no-op and keeps the same ids
        assert!(!repo.ensure_seeded().unwrap());
        assert_eq!(repo.load_all().unwrap(), first);
    }

    #[test]
    fn test_does_not_reseed_over_existing_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let repo = MealPlanRepository::new(&store);

        let slot = MealPlanSlot::empty(Weekday::Monday, MealOfDay::Dinner);
        repo.save_all(std::slice::from_ref(&slot)).unwrap();

        assert!(!repo.ensure_seeded().unwrap());
        assert_eq!(repo.load_all().unwrap(), vec![slot]);
    }

    #[test]
    fn test_set_recipe_edits_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let repo = MealPlanRepository::new(&store);
        repo.ensure_seeded().unwrap();

        let target = repo.load_all().unwrap()[4].clone();
        let updated = repo.set_recipe(target.id, "Baked Salmon").unwrap();

        assert_eq!(updated.id, target.id);
        assert_eq!(updated.day, target.day);
        assert_eq!(updated.recipe, "Baked Salmon");

        let slots = repo.load_all().unwrap();
        assert_eq!(slots.len(), 21);
        assert_eq!(slots[4].recipe, "Baked Salmon");
    }

    #[test]
    fn test_set_recipe_unknown_slot_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);
        let repo = MealPlanRepository::new(&store);
        repo.ensure_seeded().unwrap();

        assert!(matches!(
            repo.set_recipe(MealSlotId::new(), "Soup"),
            Err(RepositoryError::NotFound)
        ));
    }
}
