//! Color adjustments
//!
//! Applies gamma, brightness, contrast, saturation and hue to an RGBA8
//! image. The pipeline always reads the untouched original, so successive
//! calls with different settings never accumulate rounding error.
//!
//! # Pipeline
//!
//! For each pixel, in floating point:
//!
//! 1. **Gamma**: `c' = (c / 255)^(1 / gamma) * 255`
//! 2. **Brightness**: `c' = c + brightness * 2.55`
//! 3. **Contrast**: `c' = (c - 128) * ((contrast + 100) / 100) + 128`
//! 4. **Saturation / hue** in HSV space: `s *= (saturation + 100) / 100`,
//!    `h += hue` (degrees, wrapped)
//! 5. Clamp to [0, 255] and round
//!
//! Alpha is copied unchanged.
//!
//! # Examples
//!
//! ```
//! use pixedit_color::{ColorAdjustments, apply_adjustments};
//! use pixedit_core::PixelBuffer;
//!
//! let pix = PixelBuffer::filled(4, 4, [100, 150, 200, 255]).unwrap();
//! let adj = ColorAdjustments::identity().with_brightness(20).with_hue(90);
//! let adjusted = apply_adjustments(&pix, &adj).unwrap();
//! assert_eq!(adjusted.dimensions(), (4, 4));
//! ```

use crate::{ColorError, ColorResult};
use pixedit_core::color::{self, Hsv};
use pixedit_core::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferMut};
use std::ops::RangeInclusive;
use tracing::debug;

/// Accepted brightness values
pub const BRIGHTNESS_RANGE: RangeInclusive<i8> = -100..=100;
/// Accepted contrast values
pub const CONTRAST_RANGE: RangeInclusive<i8> = -100..=100;
/// Accepted saturation values
pub const SATURATION_RANGE: RangeInclusive<i8> = -100..=100;
/// Accepted hue rotation, in degrees
pub const HUE_RANGE: RangeInclusive<i16> = -180..=180;
/// Accepted gamma values
pub const GAMMA_RANGE: RangeInclusive<f32> = 0.1..=3.0;

/// A complete set of color adjustment values
///
/// Every field is always specified; there is no "leave unchanged" state.
/// [`ColorAdjustments::identity`] (also the [`Default`]) leaves the image
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAdjustments {
    /// Brightness offset in [-100, 100]; 100 adds 255 to every channel
    pub brightness: i8,
    /// Contrast in [-100, 100]; -100 collapses everything to mid-gray
    pub contrast: i8,
    /// Saturation in [-100, 100]; -100 removes all color
    pub saturation: i8,
    /// Hue rotation in degrees, [-180, 180]
    pub hue: i16,
    /// Gamma in [0.1, 3.0]; values above 1 brighten midtones
    pub gamma: f32,
}

impl Default for ColorAdjustments {
    fn default() -> Self {
        Self::identity()
    }
}

impl ColorAdjustments {
    /// The neutral adjustment
    pub const fn identity() -> Self {
        Self {
            brightness: 0,
            contrast: 0,
            saturation: 0,
            hue: 0,
            gamma: 1.0,
        }
    }

    pub fn with_brightness(mut self, brightness: i8) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn with_contrast(mut self, contrast: i8) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn with_saturation(mut self, saturation: i8) -> Self {
        self.saturation = saturation;
        self
    }

    pub fn with_hue(mut self, hue: i16) -> Self {
        self.hue = hue;
        self
    }

    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Check whether this adjustment leaves every pixel unchanged
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Check every field against its accepted range
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] naming the first field
    /// out of range.
    pub fn validate(&self) -> ColorResult<()> {
        if !BRIGHTNESS_RANGE.contains(&self.brightness) {
            return Err(ColorError::InvalidParameters(format!(
                "brightness must be in [-100, 100], got {}",
                self.brightness
            )));
        }
        if !CONTRAST_RANGE.contains(&self.contrast) {
            return Err(ColorError::InvalidParameters(format!(
                "contrast must be in [-100, 100], got {}",
                self.contrast
            )));
        }
        if !SATURATION_RANGE.contains(&self.saturation) {
            return Err(ColorError::InvalidParameters(format!(
                "saturation must be in [-100, 100], got {}",
                self.saturation
            )));
        }
        if !HUE_RANGE.contains(&self.hue) {
            return Err(ColorError::InvalidParameters(format!(
                "hue must be in [-180, 180], got {}",
                self.hue
            )));
        }
        // NaN fails the range check as well
        if !GAMMA_RANGE.contains(&self.gamma) {
            return Err(ColorError::InvalidParameters(format!(
                "gamma must be in [0.1, 3.0], got {}",
                self.gamma
            )));
        }
        Ok(())
    }
}

/// Precomputed per-channel and HSV factors for one adjustment
struct Pipeline {
    gamma_lut: Option<[f32; 256]>,
    offset: f32,
    contrast: f32,
    saturation: f32,
    hue_shift: f32,
}

impl Pipeline {
    fn new(adj: &ColorAdjustments) -> Self {
        let gamma_lut = if adj.gamma == 1.0 {
            None
        } else {
            let inv = 1.0 / adj.gamma;
            let mut lut = [0.0f32; 256];
            for (i, v) in lut.iter_mut().enumerate() {
                *v = (i as f32 / 255.0).powf(inv) * 255.0;
            }
            Some(lut)
        };

        Self {
            gamma_lut,
            offset: adj.brightness as f32 * 2.55,
            contrast: (adj.contrast as f32 + 100.0) / 100.0,
            saturation: (adj.saturation as f32 + 100.0) / 100.0,
            hue_shift: (adj.hue as f32).to_radians(),
        }
    }

    #[inline]
    fn channel(&self, c: u8) -> f32 {
        let g = match &self.gamma_lut {
            Some(lut) => lut[c as usize],
            None => c as f32,
        };
        (g + self.offset - 128.0) * self.contrast + 128.0
    }

    #[inline]
    fn pixel(&self, r: u8, g: u8, b: u8) -> [u8; 3] {
        let (r, g, b) = (self.channel(r), self.channel(g), self.channel(b));

        let (r, g, b) = if self.saturation == 1.0 && self.hue_shift == 0.0 {
            (r, g, b)
        } else {
            let hsv = color::rgb_to_hsv(r, g, b);
            color::hsv_to_rgb(Hsv {
                h: color::wrap_hue(hsv.h + self.hue_shift),
                s: hsv.s * self.saturation,
                v: hsv.v,
            })
        };

        [
            color::clamp_round(r),
            color::clamp_round(g),
            color::clamp_round(b),
        ]
    }
}

/// Apply a full set of color adjustments to `original`
///
/// The input is never modified; a new buffer of the same dimensions is
/// returned. The identity adjustment returns an exact copy.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if any value is out of range.
/// No pixel work is done in that case.
pub fn apply_adjustments(
    original: &PixelBuffer,
    adj: &ColorAdjustments,
) -> ColorResult<PixelBuffer> {
    adj.validate()?;

    if adj.is_identity() {
        return Ok(original.deep_clone());
    }

    let (w, h) = original.dimensions();
    let pipeline = Pipeline::new(adj);
    let mut out = PixelBufferMut::new(w, h)?;

    for (src, dst) in original
        .data()
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(out.data_mut().chunks_exact_mut(BYTES_PER_PIXEL))
    {
        let [r, g, b] = pipeline.pixel(src[color::RED], src[color::GREEN], src[color::BLUE]);
        dst[color::RED] = r;
        dst[color::GREEN] = g;
        dst[color::BLUE] = b;
        dst[color::ALPHA] = src[color::ALPHA];
    }

    debug!(width = w, height = h, ?adj, "applied color adjustments");
    Ok(out.into())
}
