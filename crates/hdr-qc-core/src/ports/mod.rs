//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the assessment core and
//! external adapters: where photos come from, where verdicts go, and how
//! batch progress is surfaced.

mod image_source;
mod progress;
mod result_sink;

pub use image_source::ImageSource;
pub use progress::{ProgressEvent, ProgressSink};
pub use result_sink::ResultSink;
