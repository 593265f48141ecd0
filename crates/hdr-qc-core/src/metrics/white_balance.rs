//! White balance check.
//!
//! Compares the mean intensity of the three color channels; a neutral
//! interior should keep them close together.

use crate::domain::{AssessOptions, Evaluator, MetricVerdict, Photo};

use super::stats::channel_means;

/// Correction comment emitted on failure.
const COMMENT: &str = "White Balance Adjustment Needed";

/// Configuration for the white balance check.
#[derive(Debug, Clone)]
pub struct WhiteBalanceConfig {
    /// Maximum allowed sum of pairwise channel-mean deviations.
    /// Empirical calibration constant.
    pub max_deviation: f64,
}

impl Default for WhiteBalanceConfig {
    fn default() -> Self {
        Self {
            max_deviation: 40.0,
        }
    }
}

/// White balance evaluator.
pub struct WhiteBalanceCheck {
    config: WhiteBalanceConfig,
}

impl WhiteBalanceCheck {
    /// Creates the check with the given configuration.
    #[must_use]
    pub const fn new(config: WhiteBalanceConfig) -> Self {
        Self { config }
    }
}

impl Default for WhiteBalanceCheck {
    fn default() -> Self {
        Self::new(WhiteBalanceConfig::default())
    }
}

impl Evaluator for WhiteBalanceCheck {
    fn name(&self) -> &'static str {
        "white_balance"
    }

    fn evaluate(&self, photo: &Photo, _opts: &AssessOptions) -> anyhow::Result<MetricVerdict> {
        let [r, g, b] = channel_means(&photo.to_rgb8());
        let deviation = (r - g).abs() + (g - b).abs() + (r - b).abs();

        if deviation > self.config.max_deviation {
            Ok(MetricVerdict::fail(self.name(), COMMENT))
        } else {
            Ok(MetricVerdict::pass(self.name()))
        }
    }
}
