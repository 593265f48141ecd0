//! Progress reporting port for batch UI integration.

use crate::domain::AssessmentRecord;

/// Events emitted while a batch of photos is assessed.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Assessment started for a photo.
    Started {
        /// Path to the photo.
        path: String,
        /// Index in the batch (0-based).
        index: usize,
        /// Total photos in the batch, if known.
        total: Option<usize>,
    },
    /// Assessment completed for a photo.
    Completed {
        /// The finished record.
        record: AssessmentRecord,
    },
    /// A photo was skipped due to an error.
    Skipped {
        /// Path to the photo.
        path: String,
        /// Reason for skipping.
        reason: String,
    },
    /// All photos have been processed.
    Finished {
        /// Photos assessed successfully.
        assessed: usize,
        /// Photos skipped.
        skipped: usize,
    },
}

/// Port for receiving progress events.
pub trait ProgressSink: Send + Sync {
    /// Called when a progress event occurs.
    fn on_event(&self, event: ProgressEvent);
}
