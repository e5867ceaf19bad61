//! Freshness status derived from expiration dates.

use serde::{Deserialize, Serialize};

/// How close a food item is to its expiration date.
///
/// Derived, never stored: classification always happens against the current
/// date (see [`crate::expiration::classify`]). Serializes as `expired` /
/// `expiring-soon` / `fresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FreshnessStatus {
    /// The expiration date is in the past.
    Expired,
    /// Expires today or within the next three days.
    ExpiringSoon,
    /// More than three days of shelf life left.
    Fresh,
}

impl FreshnessStatus {
    /// Sort priority: expired items first, fresh items last.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Expired => 0,
            Self::ExpiringSoon => 1,
            Self::Fresh => 2,
        }
    }
}

impl std::fmt::Display for FreshnessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Expired => "expired",
            Self::ExpiringSoon => "expiring-soon",
            Self::Fresh => "fresh",
        };
        f.write_str(s)
    }
}
