//! Sobel edge detection
//!
//! Computes the gradient magnitude of the luminance `(R + G + B) / 3` with
//! the horizontal and vertical Sobel kernels. The magnitude is written to
//! R, G and B, and alpha is copied from the source. Border pixels have no
//! full neighbourhood and are left all-zero.

use crate::{FilterResult, Kernel3};
use pixedit_core::color::{self, ALPHA, BLUE, GREEN, RED};
use pixedit_core::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferMut};
use tracing::debug;

/// Apply Sobel edge detection.
///
/// Images smaller than 3x3 produce an all-zero buffer.
pub fn sobel_edge(pix: &PixelBuffer) -> FilterResult<PixelBuffer> {
    let (w, h) = pix.dimensions();
    let mut out = PixelBufferMut::new(w, h)?;

    if w < 3 || h < 3 {
        return Ok(out.into());
    }

    let (w, h) = (w as usize, h as usize);
    let src = pix.data();
    let stride = w * BYTES_PER_PIXEL;

    let luma: Vec<f32> = src
        .chunks_exact(BYTES_PER_PIXEL)
        .map(|px| (px[RED] as f32 + px[GREEN] as f32 + px[BLUE] as f32) / 3.0)
        .collect();

    let kx = Kernel3::sobel_x();
    let ky = Kernel3::sobel_y();
    let dst = out.data_mut();
    let mut neighborhood = [0.0f32; 9];

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            for dy in 0..3 {
                let row = (y + dy - 1) * w;
                neighborhood[dy * 3..dy * 3 + 3].copy_from_slice(&luma[row + x - 1..row + x + 2]);
            }
            let gx = kx.apply(&neighborhood);
            let gy = ky.apply(&neighborhood);
            let mag = color::clamp_round((gx * gx + gy * gy).sqrt());

            let i = y * stride + x * BYTES_PER_PIXEL;
            dst[i + RED] = mag;
            dst[i + GREEN] = mag;
            dst[i + BLUE] = mag;
            dst[i + ALPHA] = src[i + ALPHA];
        }
    }

    debug!(width = w, height = h, "sobel edge");
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_image_has_no_edges() {
        let pix = PixelBuffer::filled(6, 5, [200, 10, 60, 255]).unwrap();
        let out = sobel_edge(&pix).unwrap();
        for y in 1..4 {
            for x in 1..5 {
                assert_eq!(out.get_pixel(x, y), Some([0, 0, 0, 255]));
            }
        }
        // border is all-zero
        assert_eq!(out.get_pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(out.get_pixel(5, 4), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_vertical_step() {
        let mut pm = PixelBufferMut::new(4, 3).unwrap();
        for y in 0..3 {
            for x in 0..4 {
                let v = if x < 2 { 0 } else { 40 };
                pm.set_pixel_unchecked(x, y, [v, v, v, 255]);
            }
        }
        let out = sobel_edge(&pm.into()).unwrap();
        // gx = 40 * (1 + 2 + 1) = 160, gy = 0
        assert_eq!(out.get_pixel(1, 1), Some([160, 160, 160, 255]));
        assert_eq!(out.get_pixel(2, 1), Some([160, 160, 160, 255]));
    }

    #[test]
    fn test_tiny_image_is_zero() {
        let pix = PixelBuffer::filled(2, 2, [255, 255, 255, 255]).unwrap();
        let out = sobel_edge(&pix).unwrap();
        assert!(out.data().iter().all(|&b| b == 0));
    }
}
