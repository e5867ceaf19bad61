//! Weekly meal plan records.

use serde::{Deserialize, Serialize};

use smart_pantry_core::{MealOfDay, MealSlotId, Weekday};

/// One slot of the weekly meal plan grid.
///
/// The grid is a fixed 7-day by 3-meal structure: slots are seeded once and
/// only their `recipe` text ever changes. There is deliberately no way to
/// add or remove individual slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanSlot {
    pub id: MealSlotId,
    pub day: Weekday,
    pub meal: MealOfDay,
    pub recipe: String,
}

impl MealPlanSlot {
    /// An empty slot for the given grid position.
    #[must_use]
    pub fn empty(day: Weekday, meal: MealOfDay) -> Self {
        Self {
            id: MealSlotId::new(),
            day,
            meal,
            recipe: String::new(),
        }
    }
}

/// The full empty grid, day-major: Monday breakfast through Sunday dinner.
#[must_use]
pub fn empty_week() -> Vec<MealPlanSlot> {
    Weekday::ALL
        .into_iter()
        .flat_map(|day| MealOfDay::ALL.into_iter().map(move |meal| MealPlanSlot::empty(day, meal)))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_week_is_seven_by_three() {
        let week = empty_week();
        assert_eq!(week.len(), 21);
        assert!(week.iter().all(|slot| slot.recipe.is_empty()));

        // Day-major order: the first three slots are Monday
        assert_eq!(week[0].day, Weekday::Monday);
        assert_eq!(week[0].meal, MealOfDay::Breakfast);
        assert_eq!(week[2].meal, MealOfDay::Dinner);
        assert_eq!(week[3].day, Weekday::Tuesday);
    }

    #[test]
    fn test_serde_uses_display_names() {
        let slot = MealPlanSlot::empty(Weekday::Friday, MealOfDay::Lunch);
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["day"], "Friday");
        assert_eq!(json["meal"], "Lunch");
        assert_eq!(json["recipe"], "");
    }
}
