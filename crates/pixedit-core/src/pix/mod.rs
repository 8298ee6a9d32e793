//! PixelBuffer - The main image container
//!
//! `PixelBuffer` is the unit of truth for "current image state" in the
//! editing engine: a width×height grid of RGBA8 samples.
//!
//! # Pixel layout
//!
//! - Samples are stored row-major, 4 bytes per pixel (R, G, B, A)
//! - Rows are tightly packed (no padding)
//! - `data.len() == width * height * 4` always holds
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `PixelBufferMut` via
//! [`PixelBuffer::try_into_mut`], [`PixelBuffer::into_mut`] or
//! [`PixelBuffer::to_mut`], then convert back with `Into<PixelBuffer>`.
//! Editing stages take a `PixelBuffer` by value and hand back a new one, so
//! a buffer visible to another holder is never mutated in place.

mod access;
mod compare;

pub use compare::PixelDiffResult;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Number of bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// One RGBA8 pixel.
pub type Rgba = [u8; 4];

/// Internal buffer data
#[derive(Debug, Clone, PartialEq, Eq)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// RGBA samples, row-major
    data: Vec<u8>,
}

impl PixData {
    fn byte_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(Error::InvalidDimension { width, height })
    }
}

/// PixelBuffer - Main image container
///
/// Uses reference counting via `Arc` so that the editing session can keep an
/// immutable "original" alongside the working copy without duplicating
/// pixels until one of them is modified.
///
/// # Examples
///
/// ```
/// use pixedit_core::PixelBuffer;
///
/// let pix = PixelBuffer::new(640, 480).unwrap();
/// assert_eq!(pix.dimensions(), (640, 480));
/// assert_eq!(pix.data().len(), 640 * 480 * 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    inner: Arc<PixData>,
}

impl PixelBuffer {
    /// Create a new buffer with the specified dimensions.
    ///
    /// All samples are initialized to zero (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 or the
    /// sample count overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = PixData::byte_len(width, height)?;
        Ok(Self::from_data(PixData {
            width,
            height,
            data: vec![0u8; len],
        }))
    }

    /// Create a buffer with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: Rgba) -> Result<Self> {
        let len = PixData::byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / BYTES_PER_PIXEL {
            data.extend_from_slice(&rgba);
        }
        Ok(Self::from_data(PixData {
            width,
            height,
            data,
        }))
    }

    /// Wrap an existing RGBA8 sample vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len()` is not
    /// `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = PixData::byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_data(PixData {
            width,
            height,
            data,
        }))
    }

    fn from_data(inner: PixData) -> Self {
        PixelBuffer {
            inner: Arc::new(inner),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.width as usize * self.inner.height as usize
    }

    /// Get the raw RGBA samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the samples of one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.inner.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Get the reference count (for debugging/testing).
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two buffers have the same dimensions.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Create a deep copy of this buffer.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Self::from_data(self.inner.as_ref().clone())
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixelBufferMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelBufferMut { inner: data }),
            Err(arc) => Err(PixelBuffer { inner: arc }),
        }
    }

    /// Get mutable access, copying the samples only if they are shared.
    pub fn into_mut(self) -> PixelBufferMut {
        match self.try_into_mut() {
            Ok(pm) => pm,
            Err(shared) => shared.to_mut(),
        }
    }

    /// Create a mutable copy of this buffer.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixelBufferMut {
        PixelBufferMut {
            inner: self.inner.as_ref().clone(),
        }
    }

    /// Consume the buffer and return its samples, copying only if shared.
    pub fn into_raw(self) -> Vec<u8> {
        self.into_mut().inner.data
    }
}

/// Mutable PixelBuffer
///
/// Allows modification of image data. Convert back to an immutable
/// [`PixelBuffer`] using `Into<PixelBuffer>`.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: PixData,
}

impl PixelBufferMut {
    /// Create a new zeroed mutable buffer.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = PixData::byte_len(width, height)?;
        Ok(PixelBufferMut {
            inner: PixData {
                width,
                height,
                data: vec![0u8; len],
            },
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the raw RGBA samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the raw RGBA samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get mutable access to one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.inner.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * stride;
        &mut self.inner.data[start..start + stride]
    }

    /// Set every pixel to `rgba`.
    pub fn fill(&mut self, rgba: Rgba) {
        for px in self.inner.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&rgba);
        }
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(pm: PixelBufferMut) -> Self {
        PixelBuffer::from_data(pm.inner)
    }
}
