//! Smart Pantry Core - Shared types library.
//!
//! This crate provides common types used across all Smart Pantry components:
//! - `server` - Local HTTP surface over the pantry record store
//! - `cli` - Command-line tools for seeding and user management
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access, no HTTP. This keeps it lightweight and allows it to be used
//! anywhere, including in tests that never touch a store.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, categories,
//!   weekdays, and freshness statuses
//! - [`expiration`] - Date-based freshness classification

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod expiration;
pub mod types;

pub use expiration::{Freshness, classify, days_until};
pub use types::*;
