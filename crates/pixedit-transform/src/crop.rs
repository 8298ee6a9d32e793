//! Rectangular cropping

use crate::{TransformError, TransformResult};
use pixedit_core::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferMut};
use tracing::debug;

/// A crop rectangle in source pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CropArea {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropArea {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check whether the rectangle is non-empty and lies inside an image of
    /// the given size.
    pub fn fits(&self, image_width: u32, image_height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self.x as u64 + self.width as u64 <= image_width as u64
            && self.y as u64 + self.height as u64 <= image_height as u64
    }
}

/// Copy the region `area` out of `pix` into a new buffer.
///
/// # Errors
///
/// Returns [`TransformError::InvalidCrop`] if the area is empty or extends
/// outside the image.
pub fn crop(pix: &PixelBuffer, area: &CropArea) -> TransformResult<PixelBuffer> {
    let (w, h) = pix.dimensions();
    if !area.fits(w, h) {
        return Err(TransformError::InvalidCrop {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height,
            image_width: w,
            image_height: h,
        });
    }

    let mut out = PixelBufferMut::new(area.width, area.height)?;
    let start = area.x as usize * BYTES_PER_PIXEL;
    let len = area.width as usize * BYTES_PER_PIXEL;
    for row in 0..area.height {
        let src = pix.row(area.y + row);
        out.row_mut(row).copy_from_slice(&src[start..start + len]);
    }

    debug!(?area, "crop");
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(w: u32, h: u32) -> PixelBuffer {
        let mut pm = PixelBufferMut::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                pm.set_pixel_unchecked(x, y, [x as u8, y as u8, 0, 255]);
            }
        }
        pm.into()
    }

    #[test]
    fn test_crop_region() {
        let pix = numbered(10, 8);
        let out = crop(&pix, &CropArea::new(3, 2, 4, 5)).unwrap();
        assert_eq!(out.dimensions(), (4, 5));
        assert_eq!(out.get_pixel(0, 0), Some([3, 2, 0, 255]));
        assert_eq!(out.get_pixel(3, 4), Some([6, 6, 0, 255]));
    }

    #[test]
    fn test_full_crop_is_copy() {
        let pix = numbered(5, 5);
        assert_eq!(crop(&pix, &CropArea::new(0, 0, 5, 5)).unwrap(), pix);
    }

    #[test]
    fn test_invalid_crops() {
        let pix = numbered(10, 10);
        for area in [
            CropArea::new(0, 0, 0, 5),
            CropArea::new(0, 0, 5, 0),
            CropArea::new(6, 0, 5, 5),
            CropArea::new(0, 9, 1, 2),
            CropArea::new(u32::MAX, 0, 2, 2),
        ] {
            assert!(matches!(
                crop(&pix, &area),
                Err(TransformError::InvalidCrop { .. })
            ));
        }
    }
}
