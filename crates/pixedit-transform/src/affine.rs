//! Affine warps
//!
//! [`AffineMatrix`] stores the top two rows of a 3×3 homogeneous matrix,
//! `[a, b, tx, c, d, ty]`, so that
//!
//! ```text
//! x' = a*x + b*y + tx
//! y' = c*x + d*y + ty
//! ```
//!
//! [`affine_sampled`] resamples with nearest neighbour, [`affine`] with
//! bilinear interpolation.
//!
//! Matrices map source coordinates to destination coordinates. The warps
//! invert the matrix and pull each destination pixel centre back into the
//! source, so the output never has holes.

use crate::{TransformError, TransformResult};
use pixedit_core::color;
use pixedit_core::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferMut, Rgba};
use tracing::debug;

/// Point in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Written where the source falls outside the image
const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// Source-to-destination mapping, see the module docs for the layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix {
    coeffs: [f32; 6],
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineMatrix {
    pub const fn identity() -> Self {
        Self {
            coeffs: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        }
    }

    /// Wrap `[a, b, tx, c, d, ty]`.
    pub const fn from_coeffs(coeffs: [f32; 6]) -> Self {
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[f32; 6] {
        &self.coeffs
    }

    /// Shift by `(tx, ty)`.
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self {
            coeffs: [1.0, 0.0, tx, 0.0, 1.0, ty],
        }
    }

    /// Scale about the origin.
    ///
    /// Negative factors mirror along the corresponding axis.
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            coeffs: [sx, 0.0, 0.0, 0.0, sy, 0.0],
        }
    }

    /// Rotate about the origin.
    ///
    /// `angle` is in radians. With y pointing down, positive angles turn
    /// the image clockwise on screen. Multiples of a quarter turn produce
    /// exact coefficients.
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = exact_sin_cos(angle);
        Self {
            coeffs: [cos, -sin, 0.0, sin, cos, 0.0],
        }
    }

    /// Determinant of the linear part
    pub fn determinant(&self) -> f32 {
        let [a, b, _, c, d, _] = self.coeffs;
        a * d - b * c
    }

    /// Destination-to-source mapping.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::SingularMatrix`] if the matrix has no
    /// inverse.
    pub fn inverse(&self) -> TransformResult<Self> {
        let [a, b, tx, c, d, ty] = self.coeffs.map(|v| v as f64);
        let det = a * d - b * c;
        if !det.is_finite() || det.abs() < f64::from(f32::EPSILON) * 1e-3 {
            return Err(TransformError::SingularMatrix);
        }

        let ia = d / det;
        let ib = -b / det;
        let ic = -c / det;
        let id = a / det;
        let itx = -(ia * tx + ib * ty);
        let ity = -(ic * tx + id * ty);
        Ok(Self::from_coeffs(
            [ia, ib, itx, ic, id, ity].map(|v| v as f32),
        ))
    }

    /// `self * other`: applies `other`, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        let [a1, b1, tx1, c1, d1, ty1] = self.coeffs;
        let [a2, b2, tx2, c2, d2, ty2] = other.coeffs;
        Self::from_coeffs([
            a1 * a2 + b1 * c2,
            a1 * b2 + b1 * d2,
            a1 * tx2 + b1 * ty2 + tx1,
            c1 * a2 + d1 * c2,
            c1 * b2 + d1 * d2,
            c1 * tx2 + d1 * ty2 + ty1,
        ])
    }

    /// Map `pt` into destination space.
    pub fn transform_point(&self, pt: Point) -> Point {
        let (x, y) = self.transform_point_float(pt.x, pt.y);
        Point::new(x, y)
    }

    #[inline]
    pub fn transform_point_float(&self, x: f32, y: f32) -> (f32, f32) {
        let [a, b, tx, c, d, ty] = self.coeffs;
        (a * x + b * y + tx, c * x + d * y + ty)
    }
}

/// `sin` and `cos` of `angle`, exact at multiples of a quarter turn
fn exact_sin_cos(angle: f32) -> (f32, f32) {
    let quarters = angle / std::f32::consts::FRAC_PI_2;
    let rounded = quarters.round();
    if (quarters - rounded).abs() < 1e-6 {
        match (rounded as i64).rem_euclid(4) {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        angle.sin_cos()
    }
}

#[inline]
fn fetch(pix: &PixelBuffer, x: i64, y: i64) -> Rgba {
    if x < 0 || y < 0 || x >= pix.width() as i64 || y >= pix.height() as i64 {
        TRANSPARENT
    } else {
        pix.get_pixel_unchecked(x as u32, y as u32)
    }
}

/// Run `sample` for every destination pixel centre mapped back into the
/// source.
fn warp(
    pix: &PixelBuffer,
    matrix: &AffineMatrix,
    mut sample: impl FnMut(f32, f32) -> Rgba,
) -> TransformResult<PixelBuffer> {
    let inv = matrix.inverse()?;
    let (w, h) = pix.dimensions();
    let mut out = PixelBufferMut::new(w, h)?;

    for y in 0..h {
        let row = out.row_mut(y);
        for x in 0..w {
            let (sx, sy) = inv.transform_point_float(x as f32 + 0.5, y as f32 + 0.5);
            let i = x as usize * BYTES_PER_PIXEL;
            row[i..i + BYTES_PER_PIXEL].copy_from_slice(&sample(sx, sy));
        }
    }

    Ok(out.into())
}

/// Warp `pix` by `matrix` with nearest-neighbour sampling.
///
/// The output has the same dimensions as the input; pixels whose source
/// lies outside the image are transparent black.
///
/// # Errors
///
/// Returns [`TransformError::SingularMatrix`] if `matrix` is not
/// invertible.
pub fn affine_sampled(
    pix: &PixelBuffer,
    matrix: &AffineMatrix,
) -> TransformResult<PixelBuffer> {
    let out = warp(pix, matrix, |sx, sy| {
        if !sx.is_finite() || !sy.is_finite() {
            return TRANSPARENT;
        }
        fetch(pix, sx.floor() as i64, sy.floor() as i64)
    })?;
    debug!(coeffs = ?matrix.coeffs(), "affine sampled");
    Ok(out)
}

/// Warp `pix` by `matrix` with bilinear interpolation.
///
/// Each channel is interpolated from the four nearest source pixels;
/// neighbours outside the image count as transparent black. The output has
/// the same dimensions as the input.
///
/// # Errors
///
/// Returns [`TransformError::SingularMatrix`] if `matrix` is not
/// invertible.
pub fn affine(pix: &PixelBuffer, matrix: &AffineMatrix) -> TransformResult<PixelBuffer> {
    let out = warp(pix, matrix, |sx, sy| {
        if !sx.is_finite() || !sy.is_finite() {
            return TRANSPARENT;
        }
        // pixel centres sit at half-integer coordinates
        let fx = sx - 0.5;
        let fy = sy - 0.5;
        let x0 = fx.floor();
        let y0 = fy.floor();
        let dx = fx - x0;
        let dy = fy - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let p00 = fetch(pix, x0, y0);
        let p10 = fetch(pix, x0 + 1, y0);
        let p01 = fetch(pix, x0, y0 + 1);
        let p11 = fetch(pix, x0 + 1, y0 + 1);

        let w00 = (1.0 - dx) * (1.0 - dy);
        let w10 = dx * (1.0 - dy);
        let w01 = (1.0 - dx) * dy;
        let w11 = dx * dy;

        let mut px = [0u8; BYTES_PER_PIXEL];
        for (ch, v) in px.iter_mut().enumerate() {
            *v = color::clamp_round(
                p00[ch] as f32 * w00
                    + p10[ch] as f32 * w10
                    + p01[ch] as f32 * w01
                    + p11[ch] as f32 * w11,
            );
        }
        px
    })?;
    debug!(coeffs = ?matrix.coeffs(), "affine interpolated");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn test_compose_order() {
        let t = AffineMatrix::translation(10.0, 0.0);
        let s = AffineMatrix::scale(2.0, 2.0);
        // scale first, then translate
        let m = t.compose(&s);
        assert_eq!(m.transform_point(Point::new(1.0, 1.0)), Point::new(12.0, 2.0));
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = AffineMatrix::translation(5.0, 7.0)
            .compose(&AffineMatrix::rotation(0.3))
            .compose(&AffineMatrix::scale(1.5, -0.5))
            .compose(&AffineMatrix::translation(3.0, -2.0));
        let inv = m.inverse().unwrap();
        let p = Point::new(4.0, 9.0);
        assert!(close(inv.transform_point(m.transform_point(p)), p));
    }

    #[test]
    fn test_singular() {
        let m = AffineMatrix::scale(0.0, 1.0);
        assert!(matches!(m.inverse(), Err(TransformError::SingularMatrix)));
    }

    #[test]
    fn test_quarter_turn_is_exact() {
        let m = AffineMatrix::rotation(FRAC_PI_2);
        assert_eq!(m.coeffs(), &[0.0, -1.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(m.transform_point(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));
    }

    #[test]
    fn test_identity_warp_is_exact() {
        let pix = PixelBuffer::from_rgba(3, 2, (0..24).map(|v| v as u8 * 10).collect()).unwrap();
        let m = AffineMatrix::identity();
        assert_eq!(affine(&pix, &m).unwrap(), pix);
        assert_eq!(affine_sampled(&pix, &m).unwrap(), pix);
    }

    #[test]
    fn test_translation_exposes_transparent() {
        let pix = PixelBuffer::filled(4, 4, [255, 0, 0, 255]).unwrap();
        let m = AffineMatrix::translation(2.0, 0.0);
        let out = affine_sampled(&pix, &m).unwrap();
        assert_eq!(out.get_pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(out.get_pixel(1, 3), Some([0, 0, 0, 0]));
        assert_eq!(out.get_pixel(2, 0), Some([255, 0, 0, 255]));

        let out = affine(&pix, &m).unwrap();
        assert_eq!(out.get_pixel(0, 2), Some([0, 0, 0, 0]));
        assert_eq!(out.get_pixel(3, 2), Some([255, 0, 0, 255]));
    }
}
