//! 3x3 convolution over the image interior
//!
//! Only pixels whose full 3x3 neighbourhood lies inside the image are
//! convolved. The outermost one-pixel ring is copied from the source, and
//! alpha is never touched. Images narrower or shorter than 3 pixels have
//! no interior and come back as an unchanged copy.

use crate::{FilterResult, Kernel3};
use pixedit_core::color::{self, ALPHA};
use pixedit_core::{BYTES_PER_PIXEL, PixelBuffer};
use tracing::debug;

/// Convolve the R, G and B channels of the interior with `kernel`.
///
/// Results are clamped to [0, 255] and rounded.
pub fn convolve3(pix: &PixelBuffer, kernel: &Kernel3) -> FilterResult<PixelBuffer> {
    let (w, h) = pix.dimensions();
    let mut out = pix.to_mut();

    if w < 3 || h < 3 {
        return Ok(out.into());
    }

    let src = pix.data();
    let stride = w as usize * BYTES_PER_PIXEL;
    let dst = out.data_mut();
    let mut neighborhood = [0.0f32; 9];

    for y in 1..(h as usize - 1) {
        for x in 1..(w as usize - 1) {
            let center = y * stride + x * BYTES_PER_PIXEL;
            for ch in 0..ALPHA {
                for ky in 0..3 {
                    let row = (y + ky - 1) * stride;
                    for kx in 0..3 {
                        neighborhood[ky * 3 + kx] =
                            src[row + (x + kx - 1) * BYTES_PER_PIXEL + ch] as f32;
                    }
                }
                dst[center + ch] = color::clamp_round(kernel.apply(&neighborhood));
            }
        }
    }

    Ok(out.into())
}

/// Sharpen the image.
///
/// Uses the kernel `[0,-i,0; -i,4i+1,-i; 0,-i,0]`; `intensity` 0 is the
/// identity.
///
/// # Errors
///
/// Returns [`crate::FilterError::InvalidParameters`] if `intensity` is
/// negative or not finite.
pub fn sharpen(pix: &PixelBuffer, intensity: f32) -> FilterResult<PixelBuffer> {
    let kernel = Kernel3::sharpen(intensity)?;
    debug!(intensity, "sharpen");
    convolve3(pix, &kernel)
}

/// Apply an emboss effect.
///
/// Flat regions map to mid-gray offsets; edges toward the lower right
/// brighten, edges toward the upper left darken.
pub fn emboss(pix: &PixelBuffer) -> FilterResult<PixelBuffer> {
    debug!("emboss");
    convolve3(pix, &Kernel3::emboss())
}
