//! One-time seeding and legacy data conversion.

#![allow(clippy::unwrap_used)]

use smart_pantry_core::{MealOfDay, Weekday};
use smart_pantry_integration_tests::TestContext;
use smart_pantry_server::repo::{MealPlanRepository, RecipeNoteRepository};
use smart_pantry_server::store::{KeyValueStore, keys};

#[test]
fn meal_plan_seeds_full_grid_once() {
    let ctx = TestContext::new();
    let repo = MealPlanRepository::new(ctx.store());

    assert!(repo.ensure_seeded().unwrap());
    let slots = repo.load_all().unwrap();
    assert_eq!(slots.len(), 21);

    // Every day/meal combination appears exactly once, all recipes empty
    for day in Weekday::ALL {
        for meal in MealOfDay::ALL {
            let matching: Vec<_> = slots
                .iter()
                .filter(|s| s.day == day && s.meal == meal)
                .collect();
            assert_eq!(matching.len(), 1, "{day} {meal}");
            assert!(matching[0].recipe.is_empty());
        }
    }

    // Idempotent: same ids after a second call
    assert!(!repo.ensure_seeded().unwrap());
    assert_eq!(repo.load_all().unwrap(), slots);
}

#[test]
fn seeded_grid_survives_recipe_edits() {
    let ctx = TestContext::new();
    let repo = MealPlanRepository::new(ctx.store());
    repo.ensure_seeded().unwrap();

    let slot = repo.load_all().unwrap()[0].clone();
    repo.set_recipe(slot.id, "Avocado Toast").unwrap();

    // Re-seeding must not reset the edit
    assert!(!repo.ensure_seeded().unwrap());
    assert_eq!(repo.load_all().unwrap()[0].recipe, "Avocado Toast");
}

#[test]
fn recipe_notes_seed_starter_set() {
    let ctx = TestContext::new();
    let repo = RecipeNoteRepository::new(ctx.store());

    assert!(repo.ensure_seeded().unwrap());
    let notes = repo.load_all().unwrap();

    let titles: Vec<_> = notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["Classic Spaghetti", "Greek Salad", "Avocado Toast"]);

    assert!(!repo.ensure_seeded().unwrap());
}

#[test]
fn legacy_favorites_convert_and_block_seeding() {
    let ctx = TestContext::new();
    ctx.store()
        .persistent()
        .set(
            keys::LEGACY_FAVORITE_RECIPES,
            r#"[
                {"id":"1","name":"Classic Spaghetti","ingredients":["Pasta","Tomato Sauce","Garlic","Onion","Ground Beef"]},
                {"id":"2","name":"Greek Salad","ingredients":["Cucumber","Tomato","Feta Cheese","Olive Oil","Olives"]}
            ]"#,
        )
        .unwrap();

    let repo = RecipeNoteRepository::new(ctx.store());

    let notes = repo.load_all().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].title, "Classic Spaghetti");
    assert_eq!(
        notes[0].content,
        "Pasta, Tomato Sauce, Garlic, Onion, Ground Beef"
    );

    // Existing legacy data counts as populated
    assert!(!repo.ensure_seeded().unwrap());
}

#[test]
fn first_save_migrates_legacy_data_to_current_key() {
    let ctx = TestContext::new();
    ctx.store()
        .persistent()
        .set(
            keys::LEGACY_FAVORITE_RECIPES,
            r#"[{"id":"1","name":"Old Favorite","ingredients":["Salt"]}]"#,
        )
        .unwrap();

    let repo = RecipeNoteRepository::new(ctx.store());
    let converted = repo.load_all().unwrap();
    repo.save_all(&converted).unwrap();

    // The current key now exists and wins
    assert!(ctx.store().persistent().get(keys::RECIPE_NOTES).unwrap().is_some());
    let notes = repo.load_all().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Old Favorite");
}
