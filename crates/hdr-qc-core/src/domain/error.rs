//! Error types for QC assessment.

use thiserror::Error;

/// Errors raised while assessing a photo.
///
/// Any evaluator failure aborts the whole assessment for that image; a
/// partial score would be misleading.
#[derive(Debug, Error)]
pub enum AssessError {
    /// The raster has no pixels; ratio statistics would divide by zero.
    #[error("empty raster ({width}x{height}): nothing to assess")]
    EmptyRaster {
        /// Raster width in pixels.
        width: u32,
        /// Raster height in pixels.
        height: u32,
    },
}
