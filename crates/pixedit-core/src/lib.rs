//! pixedit Core - Basic data structures for the image editing engine
//!
//! This crate provides the fundamental types shared by every editing stage:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - RGBA8 raster (immutable / mutable)
//! - [`color`] - channel helpers and the RGB <-> HSV conversion used by
//!   the color adjustment stage
//! - [`Error`] / [`Result`] - the core error type wrapped by stage crates

pub mod error;
pub mod pix;

pub use error::{Error, Result};
pub use pix::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferMut, PixelDiffResult, Rgba};

/// Color channel indices and helper functions for RGBA8 samples.
///
/// # Pixel format
///
/// Pixels are stored as four consecutive bytes `R, G, B, A`.
pub mod color {
    use std::f32::consts::{FRAC_PI_3, TAU};

    /// Red channel (byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (byte 3)
    pub const ALPHA: usize = 3;

    /// Compose an opaque RGBA pixel.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> [u8; 4] {
        [r, g, b, 255]
    }

    /// Compose an RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
        [r, g, b, a]
    }

    /// Clamp a floating-point sample to [0, 255] and round to the nearest
    /// integer.
    ///
    /// NaN maps to 0.
    #[inline]
    pub fn clamp_round(v: f32) -> u8 {
        if v.is_nan() {
            return 0;
        }
        v.clamp(0.0, 255.0).round() as u8
    }

    /// HSV color values.
    ///
    /// Ranges: `h` in radians [0, 2π), `s` and `v` nominally in [0, 1].
    ///
    /// Intermediate values produced from out-of-gamut RGB (e.g. after a
    /// brightness boost) may fall outside the nominal `s`/`v` range; the
    /// conversion back to RGB is exact for them as well.
    ///
    /// Hue correspondence:
    /// - 0: red
    /// - π/3: yellow
    /// - 2π/3: green
    /// - π: cyan
    /// - 4π/3: blue
    /// - 5π/3: magenta
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Hsv {
        pub h: f32,
        pub s: f32,
        pub v: f32,
    }

    /// Wrap an angle in radians into [0, 2π).
    #[inline]
    pub fn wrap_hue(h: f32) -> f32 {
        let w = h.rem_euclid(TAU);
        // rem_euclid can return TAU itself for tiny negative inputs
        if w >= TAU { 0.0 } else { w }
    }

    /// Convert floating-point RGB (nominally [0, 255]) to HSV.
    ///
    /// Uses the hexagonal max/min/diff formula. `v = max / 255`,
    /// `s = diff / max` (0 when max is 0).
    pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = max - min;

        let v = max / 255.0;
        let s = if max == 0.0 { 0.0 } else { diff / max };

        if diff == 0.0 {
            return Hsv { h: 0.0, s, v };
        }

        let sector = if max == r {
            ((g - b) / diff).rem_euclid(6.0)
        } else if max == g {
            (b - r) / diff + 2.0
        } else {
            (r - g) / diff + 4.0
        };

        Hsv {
            h: wrap_hue(sector * FRAC_PI_3),
            s,
            v,
        }
    }

    /// Convert HSV back to floating-point RGB (nominally [0, 255]).
    ///
    /// The result is not clamped.
    pub fn hsv_to_rgb(hsv: Hsv) -> (f32, f32, f32) {
        let Hsv { h, s, v } = hsv;
        let value = v * 255.0;
        let chroma = value * s;
        let m = value - chroma;

        let hp = wrap_hue(h) / FRAC_PI_3;
        let x = chroma * (1.0 - ((hp % 2.0) - 1.0).abs());

        let (r1, g1, b1) = match hp as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        (r1 + m, g1 + m, b1 + m)
    }

}
