//! HDR QC Core - Domain logic for automated HDR photo quality control.
//!
//! This crate contains the core domain types, the metric evaluator trait, the
//! individual image metrics (white balance, highlight clipping, contrast,
//! shadow detail, brightness balance), and the two aggregation policies that
//! turn metric verdicts into a deliverable QC verdict.

pub mod domain;
pub mod metrics;
pub mod policy;
pub mod ports;

pub use domain::{
    AssessError, AssessOptions, Assessment, AssessmentRecord, Evaluator, GradeReport, MetricGrade,
    MetricVerdict, Outcome, Photo, QualityLevel, RasterDimensions, ScoreReport,
};
pub use policy::{AggregationPolicy, PenaltyPolicy, PolicyKind, TallyPolicy};
pub use ports::{ImageSource, ProgressEvent, ProgressSink, ResultSink};
