//! Inventory query layer: search filtering and urgency ordering.

use chrono::NaiveDate;

use smart_pantry_core::classify;

use crate::models::FoodItem;

/// Whether an item matches a search term.
///
/// Case-insensitive substring match against the name or the category display
/// name; a blank term matches everything.
#[must_use]
pub fn matches(item: &FoodItem, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    item.name.to_lowercase().contains(&term)
        || item.category.as_str().to_lowercase().contains(&term)
}

/// Items matching the search term, in their original order.
#[must_use]
pub fn filter(items: &[FoodItem], term: &str) -> Vec<FoodItem> {
    items
        .iter()
        .filter(|item| matches(item, term))
        .cloned()
        .collect()
}

/// Order items by urgency: expired first, then expiring soon, then fresh,
/// ascending by expiration date within each status.
///
/// The sort is stable, so items sharing a status and a date keep their
/// insertion order.
pub fn sort(items: &mut [FoodItem], today: NaiveDate) {
    items.sort_by_cached_key(|item| {
        (
            classify(item.expiration_date, today).status.priority(),
            item.expiration_date,
        )
    });
}

/// Filter then sort: the composed operation behind the inventory view.
#[must_use]
pub fn query_sorted(items: &[FoodItem], term: &str, today: NaiveDate) -> Vec<FoodItem> {
    let mut matched = filter(items, term);
    sort(&mut matched, today);
    matched
}
