//! Food inventory records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use smart_pantry_core::{FoodCategory, FoodItemId};

use super::{ValidationError, required};

/// A single entry in the food inventory.
///
/// `name`, `category`, and `expirationDate` are mandatory; quantity and
/// notes are free text. All fields except `id` are replaceable on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: FoodItemId,
    pub name: String,
    pub category: FoodCategory,
    pub expiration_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FoodItem {
    /// Materialize a validated draft as a new inventory entry.
    #[must_use]
    pub fn from_draft(draft: FoodDraft) -> Self {
        Self {
            id: FoodItemId::new(),
            name: draft.name,
            category: draft.category,
            expiration_date: draft.expiration_date,
            quantity: draft.quantity,
            notes: draft.notes,
        }
    }

    /// Replace every editable field from a validated draft.
    pub fn apply(&mut self, draft: FoodDraft) {
        self.name = draft.name;
        self.category = draft.category;
        self.expiration_date = draft.expiration_date;
        self.quantity = draft.quantity;
        self.notes = draft.notes;
    }
}

/// Validated add/edit form input for a food item.
#[derive(Debug, Clone)]
pub struct FoodDraft {
    pub name: String,
    pub category: FoodCategory,
    pub expiration_date: NaiveDate,
    pub quantity: Option<String>,
    pub notes: Option<String>,
}

impl FoodDraft {
    /// Parse raw form fields into a draft.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when name, category, or expiration date
    /// is blank, when the category is not one of the fixed set, or when the
    /// date is not a valid `YYYY-MM-DD` calendar date.
    pub fn parse(
        name: &str,
        category: &str,
        expiration_date: &str,
        quantity: Option<String>,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = required(name, "name")?.to_owned();
        let category = required(category, "category")?.parse()?;
        let expiration_date = required(expiration_date, "expirationDate")?;
        let expiration_date = NaiveDate::parse_from_str(expiration_date, "%Y-%m-%d")
            .map_err(|e| ValidationError::ExpirationDate(e.to_string()))?;

        Ok(Self {
            name,
            category,
            expiration_date,
            quantity: quantity.filter(|q| !q.trim().is_empty()),
            notes: notes.filter(|n| !n.trim().is_empty()),
        })
    }
}
