//! Synthetic raster builders for testing.

use hdr_qc_core::Photo;
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

/// Builder for synthetic test photos with known metric outcomes.
pub struct SyntheticRaster;

impl SyntheticRaster {
    // === Uniform rasters ===

    /// Completely black photo: zero contrast, no clipping, neutral balance.
    #[must_use]
    pub fn all_black(width: u32, height: u32) -> Photo {
        Self::uniform_gray(width, height, 0)
    }

    /// Completely white photo: fully clipped, zero contrast.
    #[must_use]
    pub fn all_white(width: u32, height: u32) -> Photo {
        Self::uniform_gray(width, height, 255)
    }

    /// Uniform gray photo at the given value.
    #[must_use]
    pub fn uniform_gray(width: u32, height: u32, value: u8) -> Photo {
        let img = GrayImage::from_fn(width, height, |_, _| Luma([value]));
        Photo::new("synthetic://uniform_gray", DynamicImage::ImageLuma8(img))
    }

    /// Uniform RGB photo.
    #[must_use]
    pub fn uniform_rgb(width: u32, height: u32, r: u8, g: u8, b: u8) -> Photo {
        let img = RgbImage::from_fn(width, height, |_, _| Rgb([r, g, b]));
        Photo::new("synthetic://uniform_rgb", DynamicImage::ImageRgb8(img))
    }

    // === Metric-targeted rasters ===

    /// Strong warm color cast: fails the white balance check.
    #[must_use]
    pub fn warm_cast(width: u32, height: u32) -> Photo {
        Self::uniform_rgb(width, height, 200, 120, 80)
    }

    /// Neutral gradient with healthy tonal range: passes every binary check
    /// and grades clean on every tally metric.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn clean_interior(width: u32, height: u32) -> Photo {
        let img = GrayImage::from_fn(width, height, |x, _| {
            let val = 50 + ((x * 150) / width.max(1)) as u8;
            Luma([val])
        });
        Photo::new("synthetic://clean_interior", DynamicImage::ImageLuma8(img))
    }

    /// Half black, half white: extreme contrast with heavy clipping.
    #[must_use]
    pub fn split_black_white(width: u32, height: u32) -> Photo {
        let img = GrayImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        });
        Photo::new("synthetic://split", DynamicImage::ImageLuma8(img))
    }

    /// Gradient interior with a clipped "ceiling light" block covering
    /// roughly `lamp_percent` of the raster.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lamp_interior(width: u32, height: u32, lamp_percent: f64) -> Photo {
        let total = f64::from(width) * f64::from(height);
        let lamp_pixels = (total * lamp_percent / 100.0).ceil() as u32;

        let img = GrayImage::from_fn(width, height, |x, y| {
            if y * width + x < lamp_pixels {
                Luma([255u8])
            } else {
                let val = 50 + ((x * 150) / width.max(1)) as u8;
                Luma([val])
            }
        });
        Photo::new("synthetic://lamp_interior", DynamicImage::ImageLuma8(img))
    }

    /// Fails all three binary checks at once: strong cast, clipped, flat.
    #[must_use]
    pub fn worst_case(width: u32, height: u32) -> Photo {
        Self::uniform_rgb(width, height, 255, 255, 200)
    }

    // === Edge cases ===

    /// A 1x1 photo.
    #[must_use]
    pub fn single_pixel(value: u8) -> Photo {
        Self::uniform_gray(1, 1, value)
    }

    /// A 0x0 photo; assessment must reject it.
    #[must_use]
    pub fn empty() -> Photo {
        Photo::new("synthetic://empty", DynamicImage::new_rgb8(0, 0))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_builders() {
        let black = SyntheticRaster::all_black(10, 10);
        assert!(black.to_luma8().pixels().all(|p| p.0[0] == 0));

        let white = SyntheticRaster::all_white(10, 10);
        assert!(white.to_luma8().pixels().all(|p| p.0[0] == 255));

        let cast = SyntheticRaster::warm_cast(10, 10);
        assert_eq!(cast.to_rgb8().get_pixel(5, 5).0, [200, 120, 80]);
    }

    #[test]
    fn test_clean_interior_range() {
        let photo = SyntheticRaster::clean_interior(100, 10);
        let luma = photo.to_luma8();

        assert!(luma.pixels().all(|p| p.0[0] >= 50 && p.0[0] < 200));
        // Left edge dark, right edge bright
        assert!(luma.get_pixel(0, 0).0[0] < luma.get_pixel(99, 0).0[0]);
    }

    #[test]
    fn test_lamp_interior_clipped_share() {
        let photo = SyntheticRaster::lamp_interior(100, 100, 5.0);
        let clipped = photo
            .to_luma8()
            .pixels()
            .filter(|p| p.0[0] == 255)
            .count();
        assert_eq!(clipped, 500);
    }

    #[test]
    fn test_empty_has_no_pixels() {
        let photo = SyntheticRaster::empty();
        assert_eq!(photo.width, 0);
        assert_eq!(photo.pixel_count(), 0);
    }
}
