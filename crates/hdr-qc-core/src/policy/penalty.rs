//! Binary-penalty aggregation.

use tracing::debug;

use crate::domain::{
    AssessOptions, Assessment, Evaluator, MetricVerdict, Outcome, Photo, QualityLevel, ScoreReport,
};
use crate::metrics::{
    ContrastCheck, ContrastConfig, HighlightClippingCheck, HighlightClippingConfig,
    WhiteBalanceCheck, WhiteBalanceConfig,
};

use super::{run_evaluators, AggregationPolicy};

/// Score before any penalties.
const FULL_SCORE: i32 = 10;
/// Deducted per failed check.
const PENALTY: i32 = 2;
/// The score never drops below this, no matter how many checks fail.
const SCORE_FLOOR: i32 = 4;

/// Binary-penalty policy.
///
/// Runs the binary checks in a fixed order (white balance, highlight
/// clipping, contrast), deducts [`PENALTY`] per failure, and clamps at
/// [`SCORE_FLOOR`]. With the stock three checks the floor is hit exactly at
/// three failures; the clamp only bites once more checks are added.
///
/// Advisory verdicts (a check that passed but flagged something, e.g.
/// clipping attributed to lamps) surface their comment without costing
/// score.
pub struct PenaltyPolicy {
    evaluators: Vec<Box<dyn Evaluator>>,
}

impl PenaltyPolicy {
    /// Creates the policy with the stock check set and the given configs.
    #[must_use]
    pub fn new(
        white_balance: WhiteBalanceConfig,
        clipping: HighlightClippingConfig,
        contrast: ContrastConfig,
    ) -> Self {
        Self::with_evaluators(vec![
            Box::new(WhiteBalanceCheck::new(white_balance)),
            Box::new(HighlightClippingCheck::new(clipping)),
            Box::new(ContrastCheck::new(contrast)),
        ])
    }

    /// Creates the policy over an arbitrary ordered check set.
    ///
    /// Additional checks (sharpness, straightening, ...) slot in here.
    #[must_use]
    pub fn with_evaluators(evaluators: Vec<Box<dyn Evaluator>>) -> Self {
        Self { evaluators }
    }

    fn aggregate(verdicts: &[MetricVerdict]) -> ScoreReport {
        let mut comments = Vec::new();
        let mut failures = 0i32;

        for verdict in verdicts {
            match &verdict.outcome {
                Outcome::Fail { comment } => {
                    failures += 1;
                    comments.push(comment.clone());
                }
                Outcome::Advisory { comment } => comments.push(comment.clone()),
                Outcome::Pass => {}
                Outcome::Grade(level) => {
                    debug!(
                        metric = verdict.metric,
                        level = level.as_str(),
                        "graded verdict has no penalty mapping; ignored"
                    );
                }
            }
        }

        let raw = (FULL_SCORE - PENALTY * failures).max(SCORE_FLOOR);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let score = raw as u8;

        ScoreReport {
            score,
            label: QualityLevel::from_score(score),
            comments,
        }
    }
}

impl Default for PenaltyPolicy {
    fn default() -> Self {
        Self::new(
            WhiteBalanceConfig::default(),
            HighlightClippingConfig::default(),
            ContrastConfig::default(),
        )
    }
}

impl AggregationPolicy for PenaltyPolicy {
    fn name(&self) -> &'static str {
        "penalty"
    }

    fn assess(&self, photo: &Photo, opts: &AssessOptions) -> anyhow::Result<Assessment> {
        let verdicts = run_evaluators(&self.evaluators, photo, opts)?;
        Ok(Assessment::Penalty(Self::aggregate(&verdicts)))
    }
}
