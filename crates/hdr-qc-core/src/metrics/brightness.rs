//! Brightness balance grader.

use crate::domain::{AssessOptions, Evaluator, MetricVerdict, Photo, QualityLevel};

use super::stats::LumaHistogram;

/// Configuration for the brightness balance grader.
#[derive(Debug, Clone)]
pub struct BrightnessBalanceConfig {
    /// Mean luminance below this reads as too dark.
    pub min_mean: f64,
    /// Mean luminance above this reads as too bright.
    pub max_mean: f64,
}

impl Default for BrightnessBalanceConfig {
    fn default() -> Self {
        Self {
            min_mean: 80.0,
            max_mean: 200.0,
        }
    }
}

/// Brightness balance grader (categorical).
///
/// The scale is deliberately asymmetric: a balanced mean grades Good, not
/// Excellent.
pub struct BrightnessBalance {
    config: BrightnessBalanceConfig,
}

impl BrightnessBalance {
    /// Creates the grader with the given configuration.
    #[must_use]
    pub const fn new(config: BrightnessBalanceConfig) -> Self {
        Self { config }
    }
}

impl Default for BrightnessBalance {
    fn default() -> Self {
        Self::new(BrightnessBalanceConfig::default())
    }
}

impl Evaluator for BrightnessBalance {
    fn name(&self) -> &'static str {
        "Brightness Balance"
    }

    fn evaluate(&self, photo: &Photo, _opts: &AssessOptions) -> anyhow::Result<MetricVerdict> {
        let mean = LumaHistogram::from_luma(&photo.to_luma8()).mean();

        let level = if mean < self.config.min_mean || mean > self.config.max_mean {
            QualityLevel::Fair
        } else {
            QualityLevel::Good
        };

        Ok(MetricVerdict::grade(self.name(), level))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use image::{DynamicImage, Luma};

    fn gray_photo(value: u8) -> Photo {
        let img = image::GrayImage::from_fn(50, 50, |_, _| Luma([value]));
        Photo::new("synthetic://gray", DynamicImage::ImageLuma8(img))
    }

    #[test]
    fn test_too_dark_grades_fair() {
        let grader = BrightnessBalance::default();
        let verdict = grader
            .evaluate(&gray_photo(50), &AssessOptions::default())
            .expect("evaluation");
        assert_eq!(verdict.outcome.grade(), Some(QualityLevel::Fair));
    }

    #[test]
    fn test_too_bright_grades_fair() {
        let grader = BrightnessBalance::default();
        let verdict = grader
            .evaluate(&gray_photo(220), &AssessOptions::default())
            .expect("evaluation");
        assert_eq!(verdict.outcome.grade(), Some(QualityLevel::Fair));
    }

    #[test]
    fn test_balanced_grades_good_not_excellent() {
        let grader = BrightnessBalance::default();
        let verdict = grader
            .evaluate(&gray_photo(128), &AssessOptions::default())
            .expect("evaluation");
        assert_eq!(verdict.outcome.grade(), Some(QualityLevel::Good));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let grader = BrightnessBalance::default();
        let low = grader
            .evaluate(&gray_photo(80), &AssessOptions::default())
            .expect("evaluation");
        let high = grader
            .evaluate(&gray_photo(200), &AssessOptions::default())
            .expect("evaluation");
        assert_eq!(low.outcome.grade(), Some(QualityLevel::Good));
        assert_eq!(high.outcome.grade(), Some(QualityLevel::Good));
    }
}
