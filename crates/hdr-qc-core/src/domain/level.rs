//! The four fixed quality tiers used throughout both aggregation policies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical quality level for a metric or a whole image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    /// Ideal HDR result, no visible flaws.
    Excellent,
    /// Minor issue, still professionally acceptable.
    Good,
    /// Noticeable issue, may need re-edit.
    Fair,
    /// Serious issue, should be rejected or redone.
    Poor,
}

impl QualityLevel {
    /// Returns the human-readable name of this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// Returns the display icon used when rendering per-metric grades.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Excellent => "✅",
            Self::Good => "☑️",
            Self::Fair => "⚠️",
            Self::Poor => "❌",
        }
    }

    /// Maps a 0-10 score to its label.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= 9 {
            Self::Excellent
        } else if score >= 7 {
            Self::Good
        } else if score >= 5 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
