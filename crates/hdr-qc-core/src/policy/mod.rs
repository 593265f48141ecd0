//! Aggregation policies.
//!
//! A policy owns an ordered evaluator set and combines the verdicts into a
//! final [`Assessment`]. Two policies exist: the binary-penalty policy
//! (score 10 minus 2 per failed check) and the categorical-tally policy
//! (count Fair/Poor grades against a fixed decision table).

mod penalty;
mod tally;

use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::{AssessError, AssessOptions, Assessment, Evaluator, MetricVerdict, Photo};

pub use penalty::PenaltyPolicy;
pub use tally::TallyPolicy;

/// Trait implemented by both aggregation policies.
pub trait AggregationPolicy: Send + Sync {
    /// Returns the policy name.
    fn name(&self) -> &'static str;

    /// Assesses a photo: runs the evaluator set and aggregates the verdicts.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty raster or when any evaluator fails;
    /// no partial assessment is ever produced.
    fn assess(&self, photo: &Photo, opts: &AssessOptions) -> anyhow::Result<Assessment>;
}

/// Selects which aggregation policy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Binary-penalty policy over the three binary checks.
    #[default]
    Penalty,
    /// Categorical-tally policy over the six graders.
    Tally,
}

impl PolicyKind {
    /// Returns the policy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Penalty => "penalty",
            Self::Tally => "tally",
        }
    }

    /// Builds the selected policy with default metric configuration.
    #[must_use]
    pub fn build(self) -> Box<dyn AggregationPolicy> {
        match self {
            Self::Penalty => Box::new(PenaltyPolicy::default()),
            Self::Tally => Box::new(TallyPolicy::default()),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "penalty" => Ok(Self::Penalty),
            "tally" => Ok(Self::Tally),
            other => Err(format!("unknown policy '{other}'")),
        }
    }
}

/// Runs an evaluator set in order, collecting one verdict per metric.
///
/// Rejects empty rasters up front; the first evaluator error aborts the
/// assessment.
fn run_evaluators(
    evaluators: &[Box<dyn Evaluator>],
    photo: &Photo,
    opts: &AssessOptions,
) -> anyhow::Result<Vec<MetricVerdict>> {
    if photo.width == 0 || photo.height == 0 {
        return Err(AssessError::EmptyRaster {
            width: photo.width,
            height: photo.height,
        }
        .into());
    }

    let mut verdicts = Vec::with_capacity(evaluators.len());
    for evaluator in evaluators {
        let verdict = evaluator
            .evaluate(photo, opts)
            .with_context(|| format!("metric '{}' failed on {}", evaluator.name(), photo.path))?;
        trace!(metric = evaluator.name(), outcome = ?verdict.outcome, "evaluated");
        verdicts.push(verdict);
    }
    Ok(verdicts)
}
