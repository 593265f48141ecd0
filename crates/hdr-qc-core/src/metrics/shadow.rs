//! Shadow detail grader.

use crate::domain::{AssessOptions, Evaluator, MetricVerdict, Photo, QualityLevel};

use super::stats::LumaHistogram;

/// Configuration for the shadow detail grader.
#[derive(Debug, Clone)]
pub struct ShadowDetailConfig {
    /// Luminance strictly below this counts as deep shadow.
    pub shadow_level: u8,
    /// Deep-shadow fraction above this grades Poor.
    pub poor_fraction: f64,
    /// Deep-shadow fraction below this grades Excellent; in between is Fair.
    pub excellent_fraction: f64,
}

impl Default for ShadowDetailConfig {
    fn default() -> Self {
        Self {
            shadow_level: 30,
            poor_fraction: 0.10,
            excellent_fraction: 0.02,
        }
    }
}

/// Shadow detail grader (categorical).
pub struct ShadowDetail {
    config: ShadowDetailConfig,
}

impl ShadowDetail {
    /// Creates the grader with the given configuration.
    #[must_use]
    pub const fn new(config: ShadowDetailConfig) -> Self {
        Self { config }
    }
}

impl Default for ShadowDetail {
    fn default() -> Self {
        Self::new(ShadowDetailConfig::default())
    }
}

impl Evaluator for ShadowDetail {
    fn name(&self) -> &'static str {
        "Shadow Detail"
    }

    fn evaluate(&self, photo: &Photo, _opts: &AssessOptions) -> anyhow::Result<MetricVerdict> {
        let hist = LumaHistogram::from_luma(&photo.to_luma8());
        let fraction = hist.fraction_below(self.config.shadow_level);

        let level = if fraction > self.config.poor_fraction {
            QualityLevel::Poor
        } else if fraction < self.config.excellent_fraction {
            QualityLevel::Excellent
        } else {
            QualityLevel::Fair
        };

        Ok(MetricVerdict::grade(self.name(), level))
    }
}
