//! Human-readable text output adapter.

use anyhow::Result;
use hdr_qc_core::{Assessment, AssessmentRecord, ResultSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Text report adapter, one block per photo.
pub struct TextSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl TextSink {
    /// Creates a new text sink writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Creates a new text sink writing to the given writer.
    #[allow(dead_code)] // API for programmatic use
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl ResultSink for TextSink {
    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, record: &AssessmentRecord) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;

        match &record.assessment {
            Assessment::Penalty(report) => {
                writeln!(
                    writer,
                    "{}: {}/10 {} ({}x{})",
                    record.path,
                    report.score,
                    report.label,
                    record.dimensions.width,
                    record.dimensions.height
                )?;
                if report.comments.is_empty() {
                    writeln!(writer, "  No corrections needed")?;
                } else {
                    writeln!(writer, "  Corrections suggested:")?;
                    for comment in &report.comments {
                        writeln!(writer, "  - {comment}")?;
                    }
                }
            }
            Assessment::Tally(report) => {
                writeln!(
                    writer,
                    "{}: {} ({}x{})",
                    record.path,
                    report.final_rating,
                    record.dimensions.width,
                    record.dimensions.height
                )?;
                for grade in &report.grades {
                    writeln!(
                        writer,
                        "  {} {}: {}",
                        grade.level.icon(),
                        grade.metric,
                        grade.level
                    )?;
                }
                writeln!(writer, "  Comment: {}", report.comment)?;
            }
        }

        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn flush(&self) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))?;
        writer.flush()?;
        Ok(())
    }
}
