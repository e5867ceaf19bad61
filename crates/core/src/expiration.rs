//! Date-based freshness classification.
//!
//! Maps an expiration date and a reference date to a [`FreshnessStatus`] and
//! a human-readable phrase. Comparison is day-granular: time of day never
//! enters the calculation.
//!
//! The caller always supplies "today" explicitly, which keeps classification
//! deterministic and directly testable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::FreshnessStatus;

/// Last day offset (inclusive) still counted as expiring soon.
const EXPIRING_SOON_WINDOW_DAYS: i64 = 3;

/// Classification result: a status tag plus display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Freshness {
    /// Status tag, used for styling and sort priority.
    pub status: FreshnessStatus,
    /// Human-readable phrase, e.g. `"Expires tomorrow"`.
    pub text: String,
}

/// Signed number of calendar days from `today` until `expiration`.
///
/// Negative when the expiration date is in the past.
#[must_use]
pub fn days_until(expiration: NaiveDate, today: NaiveDate) -> i64 {
    (expiration - today).num_days()
}

/// Classify an expiration date against a reference date.
///
/// The expiring-soon window is `0..=3` days inclusive; fresh begins strictly
/// at four days out, expired strictly below zero.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use smart_pantry_core::{FreshnessStatus, classify};
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let soon = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();
///
/// let result = classify(soon, today);
/// assert_eq!(result.status, FreshnessStatus::ExpiringSoon);
/// assert_eq!(result.text, "Expires tomorrow");
/// ```
#[must_use]
pub fn classify(expiration: NaiveDate, today: NaiveDate) -> Freshness {
    let days = days_until(expiration, today);

    let (status, text) = if days < 0 {
        (
            FreshnessStatus::Expired,
            format!("Expired {} days ago", -days),
        )
    } else if days == 0 {
        (FreshnessStatus::ExpiringSoon, "Expires today".to_owned())
    } else if days == 1 {
        (FreshnessStatus::ExpiringSoon, "Expires tomorrow".to_owned())
    } else if days <= EXPIRING_SOON_WINDOW_DAYS {
        (
            FreshnessStatus::ExpiringSoon,
            format!("Expires in {days} days"),
        )
    } else {
        (FreshnessStatus::Fresh, format!("Expires in {days} days"))
    };

    Freshness { status, text }
}
