//! Core types for Smart Pantry.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod freshness;
pub mod id;
pub mod week;

pub use category::{CategoryError, FoodCategory};
pub use email::{Email, EmailError};
pub use freshness::FreshnessStatus;
pub use id::*;
pub use week::{MealOfDay, Weekday, WeekdayError};
