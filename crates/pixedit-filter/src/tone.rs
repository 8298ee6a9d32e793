//! Per-pixel tone filters
//!
//! Grayscale, sepia and invert. Each maps R, G and B of every pixel
//! independently of its neighbours and leaves alpha unchanged.

use pixedit_core::color::{self, BLUE, GREEN, RED};
use pixedit_core::{BYTES_PER_PIXEL, PixelBuffer};

fn map_rgb(pix: &PixelBuffer, f: impl Fn(u8, u8, u8) -> [u8; 3]) -> PixelBuffer {
    let mut out = pix.to_mut();
    for px in out.data_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
        let [r, g, b] = f(px[RED], px[GREEN], px[BLUE]);
        px[RED] = r;
        px[GREEN] = g;
        px[BLUE] = b;
    }
    out.into()
}

/// Luma of an RGB triple with the BT.601 weights.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    color::clamp_round(0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32)
}

/// Convert to grayscale: `R = G = B = round(0.299R + 0.587G + 0.114B)`.
pub fn grayscale(pix: &PixelBuffer) -> PixelBuffer {
    map_rgb(pix, |r, g, b| {
        let y = luma(r, g, b);
        [y, y, y]
    })
}

/// Apply the classic sepia tone matrix.
pub fn sepia(pix: &PixelBuffer) -> PixelBuffer {
    map_rgb(pix, |r, g, b| {
        let (r, g, b) = (r as f32, g as f32, b as f32);
        [
            color::clamp_round(0.393 * r + 0.769 * g + 0.189 * b),
            color::clamp_round(0.349 * r + 0.686 * g + 0.168 * b),
            color::clamp_round(0.272 * r + 0.534 * g + 0.131 * b),
        ]
    })
}

/// Invert the color channels: `c = 255 - c`.
pub fn invert(pix: &PixelBuffer) -> PixelBuffer {
    map_rgb(pix, |r, g, b| [255 - r, 255 - g, 255 - b])
}
