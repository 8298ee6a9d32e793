//! Image comparison operations
//!
//! - Pixel equality checks
//! - Pixel difference counting with the largest per-channel difference
//! - Mean absolute difference

use super::{BYTES_PER_PIXEL, PixelBuffer};
use crate::error::{Error, Result};

/// Result of counting pixel differences between two images
#[derive(Debug, Clone, PartialEq)]
pub struct PixelDiffResult {
    /// Number of pixels that differ in at least one channel
    pub n_diff: u64,
    /// Fraction of pixels that differ (0.0 to 1.0)
    pub fract_diff: f64,
    /// Largest absolute difference over all channels
    pub max_diff: u8,
    /// Mean absolute difference over all channels
    pub mean_abs_diff: f64,
}

impl PixelBuffer {
    /// Count the number of pixels that differ between two images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSizes`] if the dimensions differ.
    pub fn count_pixel_diffs(&self, other: &PixelBuffer) -> Result<PixelDiffResult> {
        if !self.sizes_equal(other) {
            return Err(Error::IncompatibleSizes(
                self.width(),
                self.height(),
                other.width(),
                other.height(),
            ));
        }

        let mut n_diff = 0u64;
        let mut max_diff = 0u8;
        let mut sum = 0u64;
        for (a, b) in self
            .data()
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(other.data().chunks_exact(BYTES_PER_PIXEL))
        {
            let mut differs = false;
            for c in 0..BYTES_PER_PIXEL {
                let d = a[c].abs_diff(b[c]);
                if d > 0 {
                    differs = true;
                    max_diff = max_diff.max(d);
                    sum += u64::from(d);
                }
            }
            if differs {
                n_diff += 1;
            }
        }

        let pixels = self.pixel_count() as f64;
        Ok(PixelDiffResult {
            n_diff,
            fract_diff: n_diff as f64 / pixels,
            max_diff,
            mean_abs_diff: sum as f64 / (pixels * BYTES_PER_PIXEL as f64),
        })
    }

    /// Check if two images are equal within `tolerance` per channel.
    ///
    /// Images of different sizes are never equal.
    pub fn equals_within(&self, other: &PixelBuffer, tolerance: u8) -> bool {
        self.count_pixel_diffs(other)
            .map(|r| r.max_diff <= tolerance)
            .unwrap_or(false)
    }
}
