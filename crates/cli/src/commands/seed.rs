//! Seed the fixed collections.
//!
//! Writes the empty 7x3 meal plan grid and the starter recipe notes, each
//! only when its collection has never been populated. Safe to run any number
//! of times; existing data is never touched.

use tracing::info;

use smart_pantry_server::repo::{MealPlanRepository, RecipeNoteRepository};

/// Seed the meal plan grid and starter recipe notes.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or written.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store()?;

    let seeded_plan = MealPlanRepository::new(&store).ensure_seeded()?;
    let seeded_notes = RecipeNoteRepository::new(&store).ensure_seeded()?;

    info!("Seeding complete!");
    info!(
        "  Meal plan grid: {}",
        if seeded_plan { "seeded" } else { "already populated" }
    );
    info!(
        "  Recipe notes:   {}",
        if seeded_notes { "seeded" } else { "already populated" }
    );

    Ok(())
}
