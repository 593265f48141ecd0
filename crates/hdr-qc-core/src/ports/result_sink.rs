//! Result sink port.

use crate::domain::AssessmentRecord;

/// Port for delivering assessment verdicts.
pub trait ResultSink: Send + Sync {
    /// Writes a single assessment record.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&self, record: &AssessmentRecord) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
