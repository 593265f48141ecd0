//! Placeholder graders for metrics without a real measurement yet.
//!
//! Both return a fixed grade. A future implementation replaces the stub
//! without touching the policy: color accuracy would compare against
//! color-checker patches, sharpness would use an edge-energy metric.

use crate::domain::{AssessOptions, Evaluator, MetricVerdict, Photo, QualityLevel};

/// Color accuracy grader. Stub: always Excellent.
#[derive(Debug, Default)]
pub struct ColorAccuracy;

impl Evaluator for ColorAccuracy {
    fn name(&self) -> &'static str {
        "Color Accuracy"
    }

    fn evaluate(&self, _photo: &Photo, _opts: &AssessOptions) -> anyhow::Result<MetricVerdict> {
        Ok(MetricVerdict::grade(self.name(), QualityLevel::Excellent))
    }
}

/// Clarity & sharpness grader. Stub: always Good.
#[derive(Debug, Default)]
pub struct Sharpness;

impl Evaluator for Sharpness {
    fn name(&self) -> &'static str {
        "Clarity & Sharpness"
    }

    fn evaluate(&self, _photo: &Photo, _opts: &AssessOptions) -> anyhow::Result<MetricVerdict> {
        Ok(MetricVerdict::grade(self.name(), QualityLevel::Good))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use image::DynamicImage;

    #[test]
    fn test_stubs_return_fixed_grades() {
        let photo = Photo::new("x.png", DynamicImage::new_rgb8(4, 4));
        let opts = AssessOptions::default();

        let color = ColorAccuracy
            .evaluate(&photo, &opts)
            .expect("color accuracy");
        assert_eq!(color.outcome.grade(), Some(QualityLevel::Excellent));

        let sharp = Sharpness.evaluate(&photo, &opts).expect("sharpness");
        assert_eq!(sharp.outcome.grade(), Some(QualityLevel::Good));
    }
}
