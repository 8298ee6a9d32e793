//! Deterministic synthetic test images

use pixedit_core::{PixelBuffer, PixelBufferMut, Rgba};

/// Create a uniform image
pub fn make_uniform(w: u32, h: u32, rgba: Rgba) -> PixelBuffer {
    PixelBuffer::filled(w, h, rgba).unwrap()
}

/// Create an opaque image with red increasing left to right, green top to
/// bottom, and blue constant at 128
pub fn make_gradient(w: u32, h: u32) -> PixelBuffer {
    let mut pm = PixelBufferMut::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            let r = (x * 255 / w.saturating_sub(1).max(1)) as u8;
            let g = (y * 255 / h.saturating_sub(1).max(1)) as u8;
            pm.set_pixel_unchecked(x, y, [r, g, 128, 255]);
        }
    }
    pm.into()
}

/// Create a checkerboard of `cell`-sized squares alternating `a` and `b`
pub fn make_checkerboard(w: u32, h: u32, cell: u32, a: Rgba, b: Rgba) -> PixelBuffer {
    let cell = cell.max(1);
    let mut pm = PixelBufferMut::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            let px = if (x / cell + y / cell) % 2 == 0 { a } else { b };
            pm.set_pixel_unchecked(x, y, px);
        }
    }
    pm.into()
}

/// Create an image of pseudo-random samples (alpha included) from `seed`
///
/// Uses a fixed linear congruential generator so results are stable
/// across runs and platforms.
pub fn make_noise(w: u32, h: u32, seed: u64) -> PixelBuffer {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut pm = PixelBufferMut::new(w, h).unwrap();
    for b in pm.data_mut() {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        *b = (state >> 56) as u8;
    }
    pm.into()
}

/// Create an opaque image with one vertical step edge: `left` for
/// `x < w / 2`, `right` otherwise
pub fn make_step_edge(w: u32, h: u32, left: Rgba, right: Rgba) -> PixelBuffer {
    let mut pm = PixelBufferMut::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            pm.set_pixel_unchecked(x, y, if x < w / 2 { left } else { right });
        }
    }
    pm.into()
}
