//! View transform state
//!
//! [`TransformState`] holds the pan, zoom, rotation and flip controls of
//! the editor. [`transform`] turns them into one affine matrix about the
//! image centre and resamples the image on its original canvas.

use crate::{AffineMatrix, TransformError, TransformResult, affine, affine_sampled};
use pixedit_core::PixelBuffer;
use std::fmt;
use tracing::debug;

/// Resampling method for transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Bilinear interpolation of the four nearest source pixels
    #[default]
    Bilinear,
    /// Nearest-neighbour sampling
    Nearest,
}

impl Interpolation {
    /// Parse `"bilinear"` or `"nearest"` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bilinear" => Some(Self::Bilinear),
            "nearest" => Some(Self::Nearest),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bilinear => "bilinear",
            Self::Nearest => "nearest",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pan / zoom / rotate / flip controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Horizontal offset in pixels
    pub x: f32,
    /// Vertical offset in pixels
    pub y: f32,
    /// Uniform zoom factor, must be > 0
    pub scale: f32,
    /// Rotation in degrees, clockwise on screen
    pub rotation_deg: f32,
    /// Mirror left-right
    pub flip_x: bool,
    /// Mirror top-bottom
    pub flip_y: bool,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::identity()
    }
}

impl TransformState {
    /// The neutral state
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotation_deg: 0.0,
            flip_x: false,
            flip_y: false,
        }
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation_deg = degrees;
        self
    }

    pub fn with_flip(mut self, flip_x: bool, flip_y: bool) -> Self {
        self.flip_x = flip_x;
        self.flip_y = flip_y;
        self
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Check that every value is finite and the scale positive
    pub fn validate(&self) -> TransformResult<()> {
        for (name, v) in [
            ("x", self.x),
            ("y", self.y),
            ("scale", self.scale),
            ("rotation", self.rotation_deg),
        ] {
            if !v.is_finite() {
                return Err(TransformError::InvalidParameters(format!(
                    "{name} must be finite, got {v}"
                )));
            }
        }
        if self.scale <= 0.0 {
            return Err(TransformError::InvalidParameters(format!(
                "scale must be > 0, got {}",
                self.scale
            )));
        }
        Ok(())
    }

    /// Forward matrix for an image of the given size
    ///
    /// Composes `T(center + offset) * R(rotation) * S(±scale) * T(-center)`,
    /// so scaling, flipping and rotation all pivot on the image centre.
    pub fn matrix(&self, width: u32, height: u32) -> AffineMatrix {
        let cx = width as f32 / 2.0;
        let cy = height as f32 / 2.0;
        let sx = if self.flip_x { -self.scale } else { self.scale };
        let sy = if self.flip_y { -self.scale } else { self.scale };

        AffineMatrix::translation(cx + self.x, cy + self.y)
            .compose(&AffineMatrix::rotation(self.rotation_deg.to_radians()))
            .compose(&AffineMatrix::scale(sx, sy))
            .compose(&AffineMatrix::translation(-cx, -cy))
    }
}

/// Apply `state` to `pix` with bilinear interpolation.
///
/// The output keeps the input dimensions; uncovered areas are transparent
/// black. The identity state returns the input unchanged.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] for non-finite values or
/// a non-positive scale.
pub fn transform(pix: &PixelBuffer, state: &TransformState) -> TransformResult<PixelBuffer> {
    transform_with(pix, state, Interpolation::Bilinear)
}

/// Apply `state` to `pix` with the given interpolation.
pub fn transform_with(
    pix: &PixelBuffer,
    state: &TransformState,
    interpolation: Interpolation,
) -> TransformResult<PixelBuffer> {
    state.validate()?;
    if state.is_identity() {
        return Ok(pix.clone());
    }

    let matrix = state.matrix(pix.width(), pix.height());
    debug!(?state, %interpolation, "transform");
    match interpolation {
        Interpolation::Bilinear => affine(pix, &matrix),
        Interpolation::Nearest => affine_sampled(pix, &matrix),
    }
}
