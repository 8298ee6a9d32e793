//! GIF image format support
//!
//! GIFs are treated as static images: only the first frame is decoded,
//! placed on the logical screen at its offset. Pixels outside the frame and
//! transparent palette entries come out as transparent black.

use crate::{IoError, IoResult};
use gif::{ColorOutput, DecodeOptions};
use pixedit_core::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferMut};
use std::io::Read;

/// Read the first frame of a GIF image
pub fn read_gif<R: Read>(reader: R) -> IoResult<PixelBuffer> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::RGBA);

    let mut decoder = options
        .read_info(reader)
        .map_err(|e| IoError::DecodeError(format!("GIF decode error: {}", e)))?;

    let screen_w = u32::from(decoder.width());
    let screen_h = u32::from(decoder.height());

    let frame = decoder
        .read_next_frame()
        .map_err(|e| IoError::DecodeError(format!("GIF frame error: {}", e)))?
        .ok_or_else(|| IoError::InvalidData("no frames in GIF".to_string()))?;

    let left = u32::from(frame.left);
    let top = u32::from(frame.top);
    let frame_w = u32::from(frame.width);
    let frame_h = u32::from(frame.height);

    // Some encoders write a zero-sized logical screen; fall back to the frame
    let width = screen_w.max(left + frame_w);
    let height = screen_h.max(top + frame_h);

    let mut pix_mut = PixelBufferMut::new(width, height)?;
    let stride = frame_w as usize * BYTES_PER_PIXEL;
    for fy in 0..frame_h {
        let src = &frame.buffer[fy as usize * stride..][..stride];
        let row = pix_mut.row_mut(top + fy);
        let start = left as usize * BYTES_PER_PIXEL;
        row[start..start + stride].copy_from_slice(src);
    }

    Ok(pix_mut.into())
}
