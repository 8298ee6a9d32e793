//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Grayscale, RGB and CMYK inputs are decoded to opaque
//! RGBA8. JPEG has no alpha channel, so on write every pixel is composited
//! over black first.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use pixedit_core::{BYTES_PER_PIXEL, PixelBuffer};
use std::io::Read;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);
    let rgba = samples_to_rgba(info.pixel_format, &pixels, width as usize * height as usize)?;
    Ok(PixelBuffer::from_rgba(width, height, rgba)?)
}

/// Expand `count` decoded samples of `format` to opaque RGBA.
fn samples_to_rgba(format: PixelFormat, samples: &[u8], count: usize) -> IoResult<Vec<u8>> {
    let stride = match format {
        PixelFormat::L8 => 1,
        PixelFormat::L16 => 2,
        PixelFormat::RGB24 => 3,
        PixelFormat::CMYK32 => 4,
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };
    if samples.len() < count * stride {
        return Err(IoError::DecodeError(format!(
            "JPEG data truncated: {} bytes for {count} pixels of {format:?}",
            samples.len()
        )));
    }

    let mut rgba = Vec::with_capacity(count * BYTES_PER_PIXEL);
    for s in samples.chunks_exact(stride).take(count) {
        let (r, g, b) = match format {
            PixelFormat::RGB24 => (s[0], s[1], s[2]),
            PixelFormat::CMYK32 => cmyk_to_rgb(s[0], s[1], s[2], s[3]),
            // L16 is big-endian; keep the high byte
            _ => (s[0], s[0], s[0]),
        };
        rgba.extend_from_slice(&[r, g, b, 255]);
    }
    Ok(rgba)
}

fn cmyk_to_rgb(c: u8, m: u8, y: u8, k: u8) -> (u8, u8, u8) {
    let k = f32::from(k) / 255.0;
    let channel = |v: u8| {
        let v = f32::from(v) / 255.0;
        let cmy = v * (1.0 - k) + k;
        ((1.0 - cmy) * 255.0).round() as u8
    };
    (channel(c), channel(m), channel(y))
}

/// Map an export quality in [0, 1] to the encoder's 1..=100 scale.
pub(crate) fn encoder_quality(quality: f32) -> u8 {
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Write a JPEG image.
///
/// # Arguments
/// * `pix` - Image to encode
/// * `quality` - Compression quality in [0, 1]
pub fn write_jpeg(pix: &PixelBuffer, quality: f32) -> IoResult<Vec<u8>> {
    let (width, height) = pix.dimensions();
    let w16 = u16::try_from(width)
        .map_err(|_| IoError::EncodeError(format!("JPEG width {width} exceeds 65535")))?;
    let h16 = u16::try_from(height)
        .map_err(|_| IoError::EncodeError(format!("JPEG height {height} exceeds 65535")))?;

    let mut rgb = Vec::with_capacity(pix.pixel_count() * 3);
    for px in pix.data().chunks_exact(BYTES_PER_PIXEL) {
        let a = u16::from(px[3]);
        for &c in &px[..3] {
            rgb.push(((u16::from(c) * a + 127) / 255) as u8);
        }
    }

    let mut out = Vec::new();
    let encoder = Encoder::new(&mut out, encoder_quality(quality));
    encoder
        .encode(&rgb, w16, h16, ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;
    Ok(out)
}
