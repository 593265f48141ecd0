//! Mock implementations of core port traits.

use std::sync::{Arc, Mutex, PoisonError};

use hdr_qc_core::domain::{AssessmentRecord, Photo};
use hdr_qc_core::ports::{ImageSource, ProgressEvent, ProgressSink, ResultSink};

/// Mock [`ImageSource`] yielding pre-built photos.
pub struct MockImageSource {
    photos: Vec<Photo>,
    iteration_count: Arc<Mutex<usize>>,
}

impl MockImageSource {
    /// Creates a new mock source with the given photos.
    #[must_use]
    pub fn new(photos: Vec<Photo>) -> Self {
        Self {
            photos,
            iteration_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates an empty mock source.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns how many times the source has been iterated.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        *self
            .iteration_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ImageSource for MockImageSource {
    fn photos(&self) -> Box<dyn Iterator<Item = anyhow::Result<Photo>> + Send + '_> {
        let count = Arc::clone(&self.iteration_count);
        if let Ok(mut c) = count.lock() {
            *c += 1;
        }
        Box::new(self.photos.iter().cloned().map(Ok))
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.photos.len())
    }
}

/// Mock [`ResultSink`] capturing records for assertions.
pub struct MockResultSink {
    records: Arc<Mutex<Vec<AssessmentRecord>>>,
    flush_count: Arc<Mutex<usize>>,
}

impl MockResultSink {
    /// Creates a new mock sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            flush_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns all captured records.
    #[must_use]
    pub fn records(&self) -> Vec<AssessmentRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns how many times `flush()` was called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *self
            .flush_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockResultSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSink for MockResultSink {
    fn write(&self, record: &AssessmentRecord) -> anyhow::Result<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    fn flush(&self) -> anyhow::Result<()> {
        if let Ok(mut c) = self.flush_count.lock() {
            *c += 1;
        }
        Ok(())
    }
}

/// Mock [`ProgressSink`] capturing events for assertions.
pub struct MockProgressSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressSink {
    /// Creates a new mock progress sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all captured events.
    #[must_use]
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of `Completed` events.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Completed { .. }))
            .count()
    }

    /// Returns the number of `Skipped` events.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, ProgressEvent::Skipped { .. }))
            .count()
    }

    /// Returns the final counts from the `Finished` event, if any.
    #[must_use]
    pub fn finished_counts(&self) -> Option<(usize, usize)> {
        self.events().iter().find_map(|e| match e {
            ProgressEvent::Finished { assessed, skipped } => Some((*assessed, *skipped)),
            _ => None,
        })
    }
}

impl Default for MockProgressSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for MockProgressSink {
    fn on_event(&self, event: ProgressEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use hdr_qc_core::domain::{Assessment, QualityLevel, RasterDimensions, ScoreReport};

    fn record() -> AssessmentRecord {
        AssessmentRecord {
            path: "test.jpg".into(),
            timestamp: "2026-01-01T00:00:00Z".into(),
            dimensions: RasterDimensions::new(100, 100),
            assessment: Assessment::Penalty(ScoreReport {
                score: 10,
                label: QualityLevel::Excellent,
                comments: vec![],
            }),
        }
    }

    #[test]
    fn test_mock_image_source_empty() {
        let source = MockImageSource::empty();
        assert_eq!(source.count_hint(), Some(0));
        assert_eq!(source.photos().count(), 0);
        assert_eq!(source.iteration_count(), 1);
    }

    #[test]
    fn test_mock_result_sink_captures() {
        let sink = MockResultSink::new();
        sink.write(&record()).unwrap();
        sink.flush().unwrap();

        assert_eq!(sink.records().len(), 1);
        assert_eq!(sink.records()[0].path, "test.jpg");
        assert_eq!(sink.flush_count(), 1);
    }

    #[test]
    fn test_mock_progress_sink_counts() {
        let sink = MockProgressSink::new();
        sink.on_event(ProgressEvent::Started {
            path: "test.jpg".into(),
            index: 0,
            total: Some(1),
        });
        sink.on_event(ProgressEvent::Completed { record: record() });
        sink.on_event(ProgressEvent::Finished {
            assessed: 1,
            skipped: 0,
        });

        assert_eq!(sink.completed_count(), 1);
        assert_eq!(sink.skipped_count(), 0);
        assert_eq!(sink.finished_counts(), Some((1, 0)));
    }
}
