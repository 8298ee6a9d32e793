//! Gaussian blur
//!
//! A separable Gaussian with `sigma = radius`, matching the CSS `blur()`
//! filter. The kernel extends `ceil(3 * sigma)` pixels each side, and
//! samples past the border are clamped to the nearest edge pixel. All four
//! channels are blurred independently.

use crate::{FilterError, FilterResult};
use pixedit_core::color;
use pixedit_core::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferMut};
use tracing::debug;

/// Largest accepted blur radius in pixels
pub const MAX_BLUR_RADIUS: f32 = 100.0;

/// Build a normalized 1-D Gaussian kernel for `sigma > 0`.
fn gaussian_weights(sigma: f32) -> Vec<f32> {
    let half = (3.0 * sigma).ceil() as usize;
    let denom = 2.0 * sigma * sigma;
    let mut weights: Vec<f32> = (0..=2 * half)
        .map(|i| {
            let d = i as f32 - half as f32;
            (-(d * d) / denom).exp()
        })
        .collect();
    let sum: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Blur the image with a Gaussian of standard deviation `radius` pixels.
///
/// `radius` 0 returns an unchanged copy.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `radius` is not in
/// `0..=MAX_BLUR_RADIUS`.
pub fn gaussian_blur(pix: &PixelBuffer, radius: f32) -> FilterResult<PixelBuffer> {
    if !(0.0..=MAX_BLUR_RADIUS).contains(&radius) {
        return Err(FilterError::InvalidParameters(format!(
            "blur radius must be in [0, {MAX_BLUR_RADIUS}], got {radius}"
        )));
    }
    if radius == 0.0 {
        return Ok(pix.clone());
    }

    let (w, h) = pix.dimensions();
    let (wu, hu) = (w as usize, h as usize);
    let weights = gaussian_weights(radius);
    let half = (weights.len() / 2) as isize;
    let src = pix.data();

    // Horizontal pass into a float buffer
    let mut tmp = vec![0.0f32; src.len()];
    for y in 0..hu {
        let row = y * wu;
        for x in 0..wu {
            let mut acc = [0.0f32; BYTES_PER_PIXEL];
            for (k, wt) in weights.iter().enumerate() {
                let sx = (x as isize + k as isize - half).clamp(0, wu as isize - 1) as usize;
                let i = (row + sx) * BYTES_PER_PIXEL;
                for ch in 0..BYTES_PER_PIXEL {
                    acc[ch] += wt * src[i + ch] as f32;
                }
            }
            let o = (row + x) * BYTES_PER_PIXEL;
            tmp[o..o + BYTES_PER_PIXEL].copy_from_slice(&acc);
        }
    }

    // Vertical pass
    let mut out = PixelBufferMut::new(w, h)?;
    let dst = out.data_mut();
    for y in 0..hu {
        for x in 0..wu {
            let mut acc = [0.0f32; BYTES_PER_PIXEL];
            for (k, wt) in weights.iter().enumerate() {
                let sy = (y as isize + k as isize - half).clamp(0, hu as isize - 1) as usize;
                let i = (sy * wu + x) * BYTES_PER_PIXEL;
                for ch in 0..BYTES_PER_PIXEL {
                    acc[ch] += wt * tmp[i + ch];
                }
            }
            let o = (y * wu + x) * BYTES_PER_PIXEL;
            for ch in 0..BYTES_PER_PIXEL {
                dst[o + ch] = color::clamp_round(acc[ch]);
            }
        }
    }

    debug!(radius, taps = weights.len(), "gaussian blur");
    Ok(out.into())
}
