//! Food category enum.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown category name.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown food category: {0}")]
pub struct CategoryError(pub String);

/// Category of a food item.
///
/// A closed set: the add/edit form offers exactly these choices, and stored
/// items always carry one of them. Serialized under the display name
/// (e.g. `"Fruits"`), which is also what search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodCategory {
    Fruits,
    Vegetables,
    Meat,
    Seafood,
    Dairy,
    Grains,
    Baking,
    Spices,
    Beverages,
    Snacks,
    Frozen,
    Canned,
    Other,
}

impl FoodCategory {
    /// All categories, in form-display order.
    pub const ALL: [Self; 13] = [
        Self::Fruits,
        Self::Vegetables,
        Self::Meat,
        Self::Seafood,
        Self::Dairy,
        Self::Grains,
        Self::Baking,
        Self::Spices,
        Self::Beverages,
        Self::Snacks,
        Self::Frozen,
        Self::Canned,
        Self::Other,
    ];

    /// Display name, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fruits => "Fruits",
            Self::Vegetables => "Vegetables",
            Self::Meat => "Meat",
            Self::Seafood => "Seafood",
            Self::Dairy => "Dairy",
            Self::Grains => "Grains",
            Self::Baking => "Baking",
            Self::Spices => "Spices",
            Self::Beverages => "Beverages",
            Self::Snacks => "Snacks",
            Self::Frozen => "Frozen",
            Self::Canned => "Canned",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FoodCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}
