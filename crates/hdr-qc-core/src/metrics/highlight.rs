//! Highlight metrics.
//!
//! Two evaluators look at blown highlights: the binary clipping check used
//! by the penalty policy (luminance band, with the ceiling-light escape
//! hatch) and the categorical highlight-control grader used by the tally
//! policy (near-white RGB band).

use crate::domain::{AssessOptions, Evaluator, MetricVerdict, Photo, QualityLevel};

use super::stats::{near_white_ratio, LumaHistogram};

const FAIL_COMMENT: &str = "Highlight Clipping Detected";
const LAMP_COMMENT: &str = "Highlight Clipping Detected from Lamps (Fair)";

/// Configuration for the binary highlight clipping check.
#[derive(Debug, Clone)]
pub struct HighlightClippingConfig {
    /// Luminance at or above this counts as clipped.
    pub clip_level: u8,
    /// Maximum tolerated clipped share of the raster, in percent.
    pub max_clip_percent: f64,
}

impl Default for HighlightClippingConfig {
    fn default() -> Self {
        Self {
            clip_level: 245,
            max_clip_percent: 2.0,
        }
    }
}

/// Highlight clipping evaluator (binary).
pub struct HighlightClippingCheck {
    config: HighlightClippingConfig,
}

impl HighlightClippingCheck {
    /// Creates the check with the given configuration.
    #[must_use]
    pub const fn new(config: HighlightClippingConfig) -> Self {
        Self { config }
    }
}

impl Default for HighlightClippingCheck {
    fn default() -> Self {
        Self::new(HighlightClippingConfig::default())
    }
}

impl Evaluator for HighlightClippingCheck {
    fn name(&self) -> &'static str {
        "highlight_clipping"
    }

    fn evaluate(&self, photo: &Photo, opts: &AssessOptions) -> anyhow::Result<MetricVerdict> {
        let hist = LumaHistogram::from_luma(&photo.to_luma8());
        let clipping_percentage = hist.fraction_at_or_above(self.config.clip_level) * 100.0;

        if clipping_percentage > self.config.max_clip_percent {
            if opts.ignore_lamps {
                // Still worth surfacing, but no longer a failure.
                Ok(MetricVerdict::advisory(self.name(), LAMP_COMMENT))
            } else {
                Ok(MetricVerdict::fail(self.name(), FAIL_COMMENT))
            }
        } else {
            Ok(MetricVerdict::pass(self.name()))
        }
    }
}

/// Configuration for the categorical highlight control grader.
#[derive(Debug, Clone)]
pub struct HighlightControlConfig {
    /// All three channels at or above this floor marks a near-white pixel.
    pub channel_floor: u8,
    /// Near-white share above this grades Poor.
    pub poor_ratio: f64,
    /// Near-white share below this grades Excellent; in between is Fair.
    pub excellent_ratio: f64,
}

impl Default for HighlightControlConfig {
    fn default() -> Self {
        Self {
            channel_floor: 240,
            poor_ratio: 0.05,
            excellent_ratio: 0.005,
        }
    }
}

/// Highlight control grader (categorical).
pub struct HighlightControl {
    config: HighlightControlConfig,
}

impl HighlightControl {
    /// Creates the grader with the given configuration.
    #[must_use]
    pub const fn new(config: HighlightControlConfig) -> Self {
        Self { config }
    }
}

impl Default for HighlightControl {
    fn default() -> Self {
        Self::new(HighlightControlConfig::default())
    }
}

impl Evaluator for HighlightControl {
    fn name(&self) -> &'static str {
        "Highlight Control"
    }

    fn evaluate(&self, photo: &Photo, _opts: &AssessOptions) -> anyhow::Result<MetricVerdict> {
        let ratio = near_white_ratio(&photo.to_rgb8(), self.config.channel_floor);

        let level = if ratio > self.config.poor_ratio {
            QualityLevel::Poor
        } else if ratio < self.config.excellent_ratio {
            QualityLevel::Excellent
        } else {
            QualityLevel::Fair
        };

        Ok(MetricVerdict::grade(self.name(), level))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::Outcome;
    use image::{DynamicImage, Luma, Rgb};

    fn gray_photo(value: u8) -> Photo {
        let img = image::GrayImage::from_fn(100, 100, |_, _| Luma([value]));
        Photo::new("synthetic://gray", DynamicImage::ImageLuma8(img))
    }

    /// 100x100 photo whose first `clipped` pixels (row-major) are pure white
    /// over a mid-gray base.
    fn partially_clipped(clipped: u32) -> Photo {
        let img = image::GrayImage::from_fn(100, 100, |x, y| {
            if y * 100 + x < clipped {
                Luma([255u8])
            } else {
                Luma([128u8])
            }
        });
        Photo::new("synthetic://clipped", DynamicImage::ImageLuma8(img))
    }

    #[test]
    fn test_black_buffer_never_clips() {
        let check = HighlightClippingCheck::default();
        let verdict = check
            .evaluate(&gray_photo(0), &AssessOptions::default())
            .expect("evaluation");
        assert_eq!(verdict.outcome, Outcome::Pass);
    }

    #[test]
    fn test_white_buffer_fails() {
        let check = HighlightClippingCheck::default();
        let verdict = check
            .evaluate(&gray_photo(255), &AssessOptions::default())
            .expect("evaluation");
        assert_eq!(
            verdict.outcome.comment(),
            Some("Highlight Clipping Detected")
        );
        assert!(verdict.outcome.is_fail());
    }

    #[test]
    fn test_white_buffer_with_ignore_lamps_is_advisory() {
        let check = HighlightClippingCheck::default();
        let opts = AssessOptions { ignore_lamps: true };
        let verdict = check.evaluate(&gray_photo(255), &opts).expect("evaluation");

        assert!(!verdict.outcome.is_fail());
        assert_eq!(
            verdict.outcome.comment(),
            Some("Highlight Clipping Detected from Lamps (Fair)")
        );
    }

    #[test]
    fn test_two_percent_is_not_over_threshold() {
        // Exactly 2.0% clipped: the threshold is strict
        let check = HighlightClippingCheck::default();
        let verdict = check
            .evaluate(&partially_clipped(200), &AssessOptions::default())
            .expect("evaluation");
        assert_eq!(verdict.outcome, Outcome::Pass);
    }

    #[test]
    fn test_just_over_two_percent_fails() {
        let check = HighlightClippingCheck::default();
        let verdict = check
            .evaluate(&partially_clipped(201), &AssessOptions::default())
            .expect("evaluation");
        assert!(verdict.outcome.is_fail());
    }

    #[test]
    fn test_clip_level_is_inclusive() {
        // All pixels exactly at the clip level count as clipped
        let check = HighlightClippingCheck::default();
        let verdict = check
            .evaluate(&gray_photo(245), &AssessOptions::default())
            .expect("evaluation");
        assert!(verdict.outcome.is_fail());
    }

    fn rgb_photo(pixels: impl Fn(u32, u32) -> Rgb<u8>) -> Photo {
        let img = image::RgbImage::from_fn(100, 100, |x, y| pixels(x, y));
        Photo::new("synthetic://rgb", DynamicImage::ImageRgb8(img))
    }

    #[test]
    fn test_control_grades_poor_when_washed_out() {
        let grader = HighlightControl::default();
        let photo = rgb_photo(|_, _| Rgb([250, 250, 250]));
        let verdict = grader
            .evaluate(&photo, &AssessOptions::default())
            .expect("evaluation");
        assert_eq!(verdict.outcome.grade(), Some(QualityLevel::Poor));
    }

    #[test]
    fn test_control_grades_excellent_when_clean() {
        let grader = HighlightControl::default();
        let photo = rgb_photo(|_, _| Rgb([128, 128, 128]));
        let verdict = grader
            .evaluate(&photo, &AssessOptions::default())
            .expect("evaluation");
        assert_eq!(verdict.outcome.grade(), Some(QualityLevel::Excellent));
    }

    #[test]
    fn test_control_grades_fair_in_between() {
        // 1% near-white: between 0.5% and 5%
        let grader = HighlightControl::default();
        let photo = rgb_photo(|x, y| {
            if y * 100 + x < 100 {
                Rgb([255, 255, 255])
            } else {
                Rgb([128, 128, 128])
            }
        });
        let verdict = grader
            .evaluate(&photo, &AssessOptions::default())
            .expect("evaluation");
        assert_eq!(verdict.outcome.grade(), Some(QualityLevel::Fair));
    }

    #[test]
    fn test_control_ignores_single_hot_channel() {
        // Saturated red only: not near-white, so still Excellent
        let grader = HighlightControl::default();
        let photo = rgb_photo(|_, _| Rgb([255, 100, 100]));
        let verdict = grader
            .evaluate(&photo, &AssessOptions::default())
            .expect("evaluation");
        assert_eq!(verdict.outcome.grade(), Some(QualityLevel::Excellent));
    }
}
