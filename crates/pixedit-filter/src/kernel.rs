//! Fixed 3x3 convolution kernels
//!
//! The engine only ever convolves with small fixed operators, so a kernel
//! is a plain `Copy` value: nine weights in row-major order plus a bias
//! added to every weighted sum.

use crate::{FilterError, FilterResult};

/// A 3x3 convolution kernel
///
/// Element `(x, y)` weighs the neighbour at offset `(x - 1, y - 1)` from
/// the output pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel3 {
    weights: [f32; 9],
    bias: f32,
}

impl Kernel3 {
    /// Create a kernel from nine row-major weights.
    pub const fn new(weights: [f32; 9]) -> Self {
        Self { weights, bias: 0.0 }
    }

    /// Return a copy of this kernel whose sums are offset by `bias`.
    pub const fn with_bias(mut self, bias: f32) -> Self {
        self.bias = bias;
        self
    }

    /// Kernel that reproduces its input.
    pub const fn identity() -> Self {
        Self::new([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0])
    }

    /// Sharpening kernel `[0,-i,0; -i,4i+1,-i; 0,-i,0]`.
    ///
    /// Weights always sum to 1, so flat regions are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `intensity` is
    /// negative or not finite.
    pub fn sharpen(intensity: f32) -> FilterResult<Self> {
        if !intensity.is_finite() || intensity < 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "sharpen intensity must be finite and >= 0, got {intensity}"
            )));
        }
        let i = intensity;
        Ok(Self::new([0.0, -i, 0.0, -i, 4.0 * i + 1.0, -i, 0.0, -i, 0.0]))
    }

    /// Emboss kernel `[-2,-1,0; -1,1,1; 0,1,2]` with a mid-gray bias of 128.
    pub const fn emboss() -> Self {
        Self::new([-2.0, -1.0, 0.0, -1.0, 1.0, 1.0, 0.0, 1.0, 2.0]).with_bias(128.0)
    }

    /// Horizontal-gradient Sobel kernel `[-1,0,1; -2,0,2; -1,0,1]`.
    pub const fn sobel_x() -> Self {
        Self::new([-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0])
    }

    /// Vertical-gradient Sobel kernel `[-1,-2,-1; 0,0,0; 1,2,1]`.
    pub const fn sobel_y() -> Self {
        Self::new([-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0])
    }

    /// Get the weight at `(x, y)`, or `None` outside the 3x3 grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < 3 && y < 3 {
            Some(self.weights[y * 3 + x])
        } else {
            None
        }
    }

    /// Get the row-major weights.
    pub fn weights(&self) -> &[f32; 9] {
        &self.weights
    }

    /// Get the bias.
    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Sum of all weights (bias excluded).
    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// Weighted sum of a row-major 3x3 neighbourhood, plus the bias.
    #[inline]
    pub fn apply(&self, neighborhood: &[f32; 9]) -> f32 {
        self.weights
            .iter()
            .zip(neighborhood)
            .map(|(k, v)| k * v)
            .sum::<f32>()
            + self.bias
    }
}

impl Default for Kernel3 {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharpen_sums_to_one() {
        for i in [0.0, 0.5, 1.0, 3.0] {
            assert!((Kernel3::sharpen(i).unwrap().sum() - 1.0).abs() < 1e-6);
        }
        assert!(Kernel3::sharpen(-1.0).is_err());
        assert!(Kernel3::sharpen(f32::INFINITY).is_err());
    }

    #[test]
    fn test_sobel_sums_to_zero() {
        assert_eq!(Kernel3::sobel_x().sum(), 0.0);
        assert_eq!(Kernel3::sobel_y().sum(), 0.0);
    }

    #[test]
    fn test_emboss_flat_is_mid_gray() {
        let k = Kernel3::emboss();
        assert_eq!(k.apply(&[50.0; 9]), 50.0 + 128.0);
        assert_eq!(k.get(2, 2), Some(2.0));
        assert_eq!(k.get(3, 0), None);
    }

    #[test]
    fn test_identity_apply() {
        let n = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(Kernel3::identity().apply(&n), 5.0);
        assert_eq!(Kernel3::default(), Kernel3::identity());
    }
}
