//! HDR QC Adapters - External adapters for hdr-qc.
//!
//! Currently a single adapter: the filesystem image source that walks
//! paths, decodes rasters, and feeds them into the assessment core.

pub mod fs;

pub use fs::FsImageSource;
