//! Request middleware and extractors.

pub mod auth;

pub use auth::{AuthRejection, OptionalAuth, RequireAuth};
