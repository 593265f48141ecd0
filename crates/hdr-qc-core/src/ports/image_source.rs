//! Image source port.

use crate::domain::Photo;

/// Port for supplying decoded photos to the assessment pipeline.
pub trait ImageSource: Send + Sync {
    /// Returns an iterator over photos from this source.
    ///
    /// # Errors
    ///
    /// Individual items may be errors when a photo fails to decode; the
    /// shell skips those without aborting the batch.
    fn photos(&self) -> Box<dyn Iterator<Item = anyhow::Result<Photo>> + Send + '_>;

    /// Returns the total number of photos, if known.
    fn count_hint(&self) -> Option<usize>;
}
