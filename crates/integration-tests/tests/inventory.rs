//! Food inventory CRUD, classification, and query ordering.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use smart_pantry_core::{FreshnessStatus, classify};
use smart_pantry_integration_tests::TestContext;
use smart_pantry_server::models::FoodDraft;
use smart_pantry_server::query;
use smart_pantry_server::repo::FoodItemRepository;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn draft(name: &str, category: &str, expiration: &str) -> FoodDraft {
    FoodDraft::parse(name, category, expiration, None, None).unwrap()
}

#[test]
fn crud_roundtrip_survives_reload() {
    let ctx = TestContext::new();
    let repo = FoodItemRepository::new(ctx.store());

    let milk = repo.add(draft("Milk", "Dairy", "2025-06-20")).unwrap();
    let apples = repo
        .add(FoodDraft::parse("Apples", "Fruits", "2025-06-25", Some("6".into()), Some("gala".into())).unwrap())
        .unwrap();

    assert_eq!(repo.load_all().unwrap(), vec![milk.clone(), apples.clone()]);

    let renamed = repo.update(milk.id, draft("Whole Milk", "Dairy", "2025-06-21")).unwrap();
    repo.remove(apples.id).unwrap();

    let after = repo.load_all().unwrap();
    assert_eq!(after, vec![renamed]);
    assert_eq!(after[0].name, "Whole Milk");
}

#[test]
fn classification_scenarios() {
    let today = date("2025-06-15");

    let expired = classify(date("2025-06-13"), today);
    assert_eq!(expired.status, FreshnessStatus::Expired);
    assert_eq!(expired.text, "Expired 2 days ago");

    let today_item = classify(date("2025-06-15"), today);
    assert_eq!(today_item.status, FreshnessStatus::ExpiringSoon);
    assert_eq!(today_item.text, "Expires today");

    // Window boundary: three days out is soon, four is fresh
    assert_eq!(
        classify(date("2025-06-18"), today).status,
        FreshnessStatus::ExpiringSoon
    );
    assert_eq!(
        classify(date("2025-06-19"), today).status,
        FreshnessStatus::Fresh
    );
}

#[test]
fn query_orders_expired_before_soon_before_fresh() {
    let ctx = TestContext::new();
    let repo = FoodItemRepository::new(ctx.store());
    let today = date("2025-06-15");

    repo.add(draft("Fresh", "Other", "2025-07-15")).unwrap();
    repo.add(draft("Soon", "Other", "2025-06-16")).unwrap();
    repo.add(draft("Expired", "Other", "2025-06-10")).unwrap();

    let items = repo.load_all().unwrap();
    let sorted = query::query_sorted(&items, "", today);
    let names: Vec<_> = sorted.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Expired", "Soon", "Fresh"]);
}

#[test]
fn query_tie_break_is_insertion_order() {
    let ctx = TestContext::new();
    let repo = FoodItemRepository::new(ctx.store());
    let today = date("2025-06-15");

    repo.add(draft("First", "Other", "2025-06-20")).unwrap();
    repo.add(draft("Second", "Other", "2025-06-20")).unwrap();

    let items = repo.load_all().unwrap();
    let sorted = query::query_sorted(&items, "", today);
    let names: Vec<_> = sorted.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);
}

#[test]
fn search_matches_name_or_category() {
    let ctx = TestContext::new();
    let repo = FoodItemRepository::new(ctx.store());
    let today = date("2025-06-15");

    repo.add(draft("Milk", "Dairy", "2025-06-20")).unwrap();
    repo.add(draft("Cheddar", "Dairy", "2025-07-01")).unwrap();
    repo.add(draft("Apples", "Fruits", "2025-06-18")).unwrap();

    let items = repo.load_all().unwrap();

    let by_category = query::query_sorted(&items, "DAIRY", today);
    assert_eq!(by_category.len(), 2);

    let by_name = query::query_sorted(&items, "chedd", today);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Cheddar");

    let none = query::query_sorted(&items, "seafood", today);
    assert!(none.is_empty());
}
