//! Categorical-tally aggregation.

use tracing::debug;

use crate::domain::{
    AssessOptions, Assessment, Evaluator, GradeReport, MetricGrade, MetricVerdict, Photo,
    QualityLevel,
};
use crate::metrics::{
    BrightnessBalance, BrightnessBalanceConfig, ColorAccuracy, ContrastConfig, ContrastDepth,
    HighlightControl, HighlightControlConfig, ShadowDetail, ShadowDetailConfig, Sharpness,
};

use super::{run_evaluators, AggregationPolicy};

const RATING_EXCELLENT: &str = "10/10 – Excellent";
const RATING_GOOD: &str = "8/10 – Good";
const RATING_FAIR: &str = "6/10 – Fair";
const RATING_POOR: &str = "4/10 – Poor";

/// Canned operator comment for each final rating.
fn canned_comment(rating: &str) -> &'static str {
    match rating {
        RATING_EXCELLENT => {
            "Professional quality HDR image. Balanced lighting, crisp details, and clean highlights."
        }
        RATING_GOOD => "Minor balance or exposure issue, but overall clean and sharp.",
        RATING_FAIR => "Flatness or brightness imbalance noticeable. Still usable with minor edits.",
        _ => "Multiple quality issues detected. Recommend re-edit or revision.",
    }
}

/// Categorical-tally policy.
///
/// Runs the six graders in a fixed order and tallies Poor and Fair grades
/// against a first-match decision table:
///
/// 1. two or more Poor → `4/10 – Poor`
/// 2. one Poor, or two or more Fair → `6/10 – Fair`
/// 3. exactly one Fair → `8/10 – Good`
/// 4. otherwise → `10/10 – Excellent`
pub struct TallyPolicy {
    evaluators: Vec<Box<dyn Evaluator>>,
}

impl TallyPolicy {
    /// Creates the policy with the stock grader set and the given configs.
    #[must_use]
    pub fn new(
        highlight: HighlightControlConfig,
        shadow: ShadowDetailConfig,
        brightness: BrightnessBalanceConfig,
        contrast: ContrastConfig,
    ) -> Self {
        Self::with_evaluators(vec![
            Box::new(HighlightControl::new(highlight)),
            Box::new(ShadowDetail::new(shadow)),
            Box::new(ColorAccuracy),
            Box::new(BrightnessBalance::new(brightness)),
            Box::new(ContrastDepth::new(contrast)),
            Box::new(Sharpness),
        ])
    }

    /// Creates the policy over an arbitrary ordered grader set.
    #[must_use]
    pub fn with_evaluators(evaluators: Vec<Box<dyn Evaluator>>) -> Self {
        Self { evaluators }
    }

    fn aggregate(verdicts: &[MetricVerdict]) -> GradeReport {
        let mut grades = Vec::with_capacity(verdicts.len());
        for verdict in verdicts {
            if let Some(level) = verdict.outcome.grade() {
                grades.push(MetricGrade {
                    metric: verdict.metric.to_string(),
                    level,
                });
            } else {
                debug!(
                    metric = verdict.metric,
                    "binary verdict has no tally mapping; ignored"
                );
            }
        }

        let poor_count = grades
            .iter()
            .filter(|g| g.level == QualityLevel::Poor)
            .count();
        let fair_count = grades
            .iter()
            .filter(|g| g.level == QualityLevel::Fair)
            .count();

        let final_rating = if poor_count >= 2 {
            RATING_POOR
        } else if poor_count == 1 || fair_count >= 2 {
            RATING_FAIR
        } else if fair_count == 1 {
            RATING_GOOD
        } else {
            RATING_EXCELLENT
        };

        GradeReport {
            grades,
            final_rating: final_rating.to_string(),
            comment: canned_comment(final_rating).to_string(),
        }
    }
}

impl Default for TallyPolicy {
    fn default() -> Self {
        Self::new(
            HighlightControlConfig::default(),
            ShadowDetailConfig::default(),
            BrightnessBalanceConfig::default(),
            ContrastConfig::default(),
        )
    }
}

impl AggregationPolicy for TallyPolicy {
    fn name(&self) -> &'static str {
        "tally"
    }

    fn assess(&self, photo: &Photo, opts: &AssessOptions) -> anyhow::Result<Assessment> {
        let verdicts = run_evaluators(&self.evaluators, photo, opts)?;
        Ok(Assessment::Tally(Self::aggregate(&verdicts)))
    }
}
