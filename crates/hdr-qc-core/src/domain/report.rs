//! Assessment result types.

use serde::{Deserialize, Serialize};

use super::QualityLevel;

/// Verdict of the binary-penalty policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Final score; always one of 4, 6, 8, 10 with the stock check set.
    pub score: u8,
    /// Label derived from the score.
    pub label: QualityLevel,
    /// Correction suggestions in evaluator order. Empty means deliverable.
    pub comments: Vec<String>,
}

impl ScoreReport {
    /// Whether the image needs operator attention before delivery.
    #[must_use]
    pub fn needs_edits(&self) -> bool {
        !self.comments.is_empty()
    }
}

/// One metric's grade within a [`GradeReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricGrade {
    /// Metric display name.
    pub metric: String,
    /// Graded quality level.
    pub level: QualityLevel,
}

/// Verdict of the categorical-tally policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeReport {
    /// Per-metric grades in evaluator order.
    pub grades: Vec<MetricGrade>,
    /// One of the four fixed rating strings, e.g. `"8/10 – Good"`.
    pub final_rating: String,
    /// The canned comment matching the final rating.
    pub comment: String,
}

impl GradeReport {
    /// Whether the image needs operator attention before delivery.
    ///
    /// Any Fair or Poor grade pulls the final rating below the top tier.
    #[must_use]
    pub fn needs_edits(&self) -> bool {
        self.grades
            .iter()
            .any(|g| matches!(g.level, QualityLevel::Fair | QualityLevel::Poor))
    }
}

/// The verdict of one assessment, shaped by the policy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Assessment {
    /// Binary-penalty verdict.
    Penalty(ScoreReport),
    /// Categorical-tally verdict.
    Tally(GradeReport),
}

impl Assessment {
    /// Whether the image needs operator attention before delivery.
    #[must_use]
    pub fn needs_edits(&self) -> bool {
        match self {
            Self::Penalty(report) => report.needs_edits(),
            Self::Tally(report) => report.needs_edits(),
        }
    }
}

/// Raster dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl RasterDimensions {
    /// Creates dimensions from width and height.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Complete record for a single assessed image, as emitted to result sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Path of the assessed image.
    pub path: String,
    /// Timestamp of assessment (RFC 3339).
    pub timestamp: String,
    /// Raster dimensions.
    pub dimensions: RasterDimensions,
    /// The policy verdict.
    pub assessment: Assessment,
}
