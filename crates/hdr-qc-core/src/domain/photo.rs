//! The in-memory photo handed to evaluators.

use image::GenericImageView;

/// A decoded photo under assessment.
///
/// The raster is owned by the assessment call and never mutated; evaluators
/// only derive aggregate statistics from it.
#[derive(Debug, Clone)]
pub struct Photo {
    /// Path or identifier of the source image.
    pub path: String,
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Decoded pixel data.
    pub image: image::DynamicImage,
}

impl Photo {
    /// Wraps a decoded image with its source path.
    #[must_use]
    pub fn new(path: impl Into<String>, image: image::DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            path: path.into(),
            width,
            height,
            image,
        }
    }

    /// Total pixel count.
    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns the photo as an 8-bit RGB raster.
    #[must_use]
    pub fn to_rgb8(&self) -> image::RgbImage {
        self.image.to_rgb8()
    }

    /// Returns the photo as an 8-bit luminance raster.
    #[must_use]
    pub fn to_luma8(&self) -> image::GrayImage {
        self.image.to_luma8()
    }
}

/// Per-call assessment options.
///
/// Passed explicitly into every evaluation; there is no ambient
/// configuration state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssessOptions {
    /// Treat highlight clipping as coming from ceiling lights: the clipping
    /// check still reports the finding but no longer fails the image.
    pub ignore_lamps: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_from_image() {
        let photo = Photo::new("a.png", image::DynamicImage::new_rgb8(64, 48));
        assert_eq!(photo.width, 64);
        assert_eq!(photo.height, 48);
        assert_eq!(photo.pixel_count(), 64 * 48);
    }

    #[test]
    fn test_default_options() {
        assert!(!AssessOptions::default().ignore_lamps);
    }
}
