//! Shopping list records.

use serde::{Deserialize, Serialize};

use smart_pantry_core::ShoppingItemId;

use super::{ValidationError, required};

/// A single shopping list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: ShoppingItemId,
    pub name: String,
    pub completed: bool,
}

impl ShoppingItem {
    /// Create a new, not-yet-completed entry.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] when the name is blank.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ShoppingItemId::new(),
            name: required(name, "name")?.to_owned(),
            completed: false,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_uncompleted() {
        let item = ShoppingItem::new("Eggs").unwrap();
        assert_eq!(item.name, "Eggs");
        assert!(!item.completed);
    }

    #[test]
    fn test_new_rejects_blank_name() {
        assert!(matches!(
            ShoppingItem::new("   "),
            Err(ValidationError::Required("name"))
        ));
    }
}
