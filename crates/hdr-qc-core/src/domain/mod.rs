//! Core domain types for HDR QC assessment.

mod error;
mod evaluator;
mod level;
mod photo;
mod report;
mod verdict;

pub use error::AssessError;
pub use evaluator::Evaluator;
pub use level::QualityLevel;
pub use photo::{AssessOptions, Photo};
pub use report::{
    Assessment, AssessmentRecord, GradeReport, MetricGrade, RasterDimensions, ScoreReport,
};
pub use verdict::{MetricVerdict, Outcome};
