//! Test support utilities for hdr-qc.
//!
//! Provides mocks and synthetic raster builders for testing the QC
//! assessment pipeline.
//!
//! # Example
//!
//! ```
//! use hdr_qc_test_support::{MockImageSource, SyntheticRaster};
//!
//! // Create synthetic test photos
//! let clean = SyntheticRaster::clean_interior(128, 128);
//! let blown = SyntheticRaster::all_white(128, 128);
//!
//! // Create a mock image source
//! let source = MockImageSource::new(vec![clean, blown]);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticRaster;
pub use mocks::{MockImageSource, MockProgressSink, MockResultSink};
