//! Shared raster statistics.
//!
//! Every metric reduces the photo to a handful of aggregate numbers; the
//! luminance histogram and the per-channel reductions here are the only
//! pixel loops in the crate.

/// 256-bin histogram of luminance values.
#[derive(Debug, Clone)]
pub struct LumaHistogram {
    bins: [u64; 256],
    total: u64,
}

impl LumaHistogram {
    /// Computes the histogram of a grayscale raster.
    #[must_use]
    pub fn from_luma(image: &image::GrayImage) -> Self {
        let mut bins = [0u64; 256];
        for pixel in image.pixels() {
            bins[usize::from(pixel.0[0])] += 1;
        }
        let total = bins.iter().sum();
        Self { bins, total }
    }

    /// Total pixel count.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Mean luminance.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let sum: u64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(i, &count)| (i as u64) * count)
            .sum();
        sum as f64 / self.total as f64
    }

    /// Population standard deviation of luminance.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let mean = self.mean();
        let variance: f64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let diff = (i as f64) - mean;
                diff * diff * (count as f64)
            })
            .sum::<f64>()
            / (self.total as f64);
        variance.sqrt()
    }

    /// Fraction of pixels with luminance strictly below `level`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn fraction_below(&self, level: u8) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let count: u64 = self.bins[..usize::from(level)].iter().sum();
        count as f64 / self.total as f64
    }

    /// Fraction of pixels with luminance at or above `level`.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn fraction_at_or_above(&self, level: u8) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let count: u64 = self.bins[usize::from(level)..].iter().sum();
        count as f64 / self.total as f64
    }
}

/// Mean intensity of each RGB channel across the raster.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn channel_means(image: &image::RgbImage) -> [f64; 3] {
    let mut sums = [0u64; 3];
    for pixel in image.pixels() {
        sums[0] += u64::from(pixel.0[0]);
        sums[1] += u64::from(pixel.0[1]);
        sums[2] += u64::from(pixel.0[2]);
    }
    let total = u64::from(image.width()) * u64::from(image.height());
    if total == 0 {
        return [0.0; 3];
    }
    sums.map(|s| s as f64 / total as f64)
}

/// Fraction of pixels whose three channels all sit at or above `floor`.
///
/// This is the near-white test the categorical highlight grader uses; the
/// upper bound of the band is channel saturation itself.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn near_white_ratio(image: &image::RgbImage, floor: u8) -> f64 {
    let total = u64::from(image.width()) * u64::from(image.height());
    if total == 0 {
        return 0.0;
    }
    let count = image
        .pixels()
        .filter(|p| p.0.iter().all(|&c| c >= floor))
        .count() as f64;
    count / total as f64
}
