//! Evaluator trait for extensible image metrics.

use super::{AssessOptions, MetricVerdict, Photo};

/// Trait implemented by every image metric.
///
/// Evaluators are pure: they derive aggregate statistics from the raster and
/// never mutate it or share state with one another, so a policy may run them
/// in any order.
pub trait Evaluator: Send + Sync {
    /// Returns the metric name as it appears in reports and logs.
    fn name(&self) -> &'static str;

    /// Evaluates the metric against a photo.
    ///
    /// # Errors
    ///
    /// Returns an error if the metric cannot be computed; the caller aborts
    /// the whole assessment rather than report a partial score.
    fn evaluate(&self, photo: &Photo, opts: &AssessOptions) -> anyhow::Result<MetricVerdict>;
}
