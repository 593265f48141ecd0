//! Contrast metrics.
//!
//! Both policies measure the same statistic, the population standard
//! deviation of luminance, but interpret it differently: the binary check
//! fails flat images, the grader maps them to Fair.

use crate::domain::{AssessOptions, Evaluator, MetricVerdict, Photo, QualityLevel};

use super::stats::LumaHistogram;

const COMMENT: &str = "Increase Image Contrast";

/// Shared configuration for the contrast check and grader.
#[derive(Debug, Clone)]
pub struct ContrastConfig {
    /// Luminance standard deviation below this reads as flat.
    pub min_std_dev: f64,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self { min_std_dev: 30.0 }
    }
}

/// Contrast evaluator (binary).
pub struct ContrastCheck {
    config: ContrastConfig,
}

impl ContrastCheck {
    /// Creates the check with the given configuration.
    #[must_use]
    pub const fn new(config: ContrastConfig) -> Self {
        Self { config }
    }
}

impl Default for ContrastCheck {
    fn default() -> Self {
        Self::new(ContrastConfig::default())
    }
}

impl Evaluator for ContrastCheck {
    fn name(&self) -> &'static str {
        "contrast"
    }

    fn evaluate(&self, photo: &Photo, _opts: &AssessOptions) -> anyhow::Result<MetricVerdict> {
        let std_dev = LumaHistogram::from_luma(&photo.to_luma8()).std_dev();

        if std_dev < self.config.min_std_dev {
            Ok(MetricVerdict::fail(self.name(), COMMENT))
        } else {
            Ok(MetricVerdict::pass(self.name()))
        }
    }
}

/// Contrast & depth grader (categorical).
pub struct ContrastDepth {
    config: ContrastConfig,
}

impl ContrastDepth {
    /// Creates the grader with the given configuration.
    #[must_use]
    pub const fn new(config: ContrastConfig) -> Self {
        Self { config }
    }
}

impl Default for ContrastDepth {
    fn default() -> Self {
        Self::new(ContrastConfig::default())
    }
}

impl Evaluator for ContrastDepth {
    fn name(&self) -> &'static str {
        "Contrast & Depth"
    }

    fn evaluate(&self, photo: &Photo, _opts: &AssessOptions) -> anyhow::Result<MetricVerdict> {
        let std_dev = LumaHistogram::from_luma(&photo.to_luma8()).std_dev();

        let level = if std_dev < self.config.min_std_dev {
            QualityLevel::Fair
        } else {
            QualityLevel::Excellent
        };

        Ok(MetricVerdict::grade(self.name(), level))
    }
}
