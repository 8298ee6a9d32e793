//! Pixel access functions
//!
//! Per-pixel get/set for [`PixelBuffer`] and [`PixelBufferMut`].
//! The checked variants return `None` / an error for out-of-range
//! coordinates; the `_unchecked` variants panic instead and are meant for
//! loops that already iterate within bounds.

use super::{BYTES_PER_PIXEL, PixData, PixelBuffer, PixelBufferMut, Rgba};
use crate::error::{Error, Result};

impl PixData {
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    #[inline]
    fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn read(&self, x: u32, y: u32) -> Rgba {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

impl PixelBuffer {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.inner
            .contains(x, y)
            .then(|| self.inner.read(x, y))
    }

    /// Get the pixel at (x, y) without a bounds check on the coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset falls outside the sample buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        self.inner.read(x, y)
    }

    /// Get the RGB components at (x, y), ignoring alpha.
    #[inline]
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(|[r, g, b, _]| (r, g, b))
    }
}

impl PixelBufferMut {
    /// Get the pixel at (x, y).
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.inner
            .contains(x, y)
            .then(|| self.inner.read(x, y))
    }

    /// Get the pixel at (x, y) without a bounds check on the coordinates.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        self.inner.read(x, y)
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the
    /// image.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: Rgba) -> Result<()> {
        if !self.inner.contains(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_pixel_unchecked(x, y, rgba);
        Ok(())
    }

    /// Set the pixel at (x, y) without a bounds check on the coordinates.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, rgba: Rgba) {
        let i = self.inner.offset(x, y);
        self.inner.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }

    /// Set the RGB components at (x, y), making the pixel opaque.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, [r, g, b, 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let mut pm = PixelBufferMut::new(4, 3).unwrap();
        pm.set_pixel(3, 2, [10, 20, 30, 40]).unwrap();
        pm.set_rgb(0, 0, 1, 2, 3).unwrap();
        let pix: PixelBuffer = pm.into();
        assert_eq!(pix.get_pixel(3, 2), Some([10, 20, 30, 40]));
        assert_eq!(pix.get_pixel(0, 0), Some([1, 2, 3, 255]));
        assert_eq!(pix.get_rgb(3, 2), Some((10, 20, 30)));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut pm = PixelBufferMut::new(2, 2).unwrap();
        assert!(pm.get_pixel(2, 0).is_none());
        assert!(matches!(
            pm.set_pixel(0, 2, [0; 4]),
            Err(Error::OutOfBounds { x: 0, y: 2, .. })
        ));
    }

    #[test]
    fn test_layout_is_row_major() {
        let mut pm = PixelBufferMut::new(2, 2).unwrap();
        pm.set_pixel_unchecked(1, 1, [7, 7, 7, 7]);
        assert_eq!(&pm.data()[12..16], &[7, 7, 7, 7]);
    }
}
