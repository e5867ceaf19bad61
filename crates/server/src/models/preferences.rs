//! Accessibility preferences.

use serde::{Deserialize, Serialize};

/// Text size preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Per-user accessibility preferences.
///
/// Stored as individual scalar entries rather than one blob, so each value
/// degrades to its own default when absent or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub high_contrast: bool,
    pub font_size: FontSize,
    pub reduced_motion: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert!(!prefs.high_contrast);
        assert_eq!(prefs.font_size, FontSize::Medium);
        assert!(!prefs.reduced_motion);
    }

    #[test]
    fn test_font_size_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FontSize::Large).unwrap(), "\"large\"");
    }
}
