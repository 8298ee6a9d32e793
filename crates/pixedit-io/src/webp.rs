//! WebP codec
//!
//! Decoding accepts lossy and lossless still images. Export is always
//! lossless because `image-webp` has no lossy encoder.

use crate::{IoError, IoResult};
use image_webp::{ColorType, EncoderParams, WebPDecoder, WebPEncoder};
use pixedit_core::{BYTES_PER_PIXEL, PixelBuffer};
use std::io::{BufRead, Seek, Write};

fn decode_err(e: image_webp::DecodingError) -> IoError {
    IoError::DecodeError(format!("webp: {e}"))
}

/// Decode a still WebP image into RGBA.
///
/// Opaque images get alpha 255. Animations are rejected.
pub fn read_webp<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = WebPDecoder::new(reader).map_err(decode_err)?;
    if decoder.is_animated() {
        return Err(IoError::UnsupportedFormat("animated webp".into()));
    }

    let (w, h) = decoder.dimensions();
    let Some(len) = decoder.output_buffer_size() else {
        return Err(IoError::DecodeError(format!("webp: {w}x{h} image too large")));
    };
    let mut samples = vec![0u8; len];
    decoder.read_image(&mut samples).map_err(decode_err)?;

    let data = if decoder.has_alpha() {
        samples
    } else {
        let mut data = Vec::with_capacity(w as usize * h as usize * BYTES_PER_PIXEL);
        for rgb in samples.chunks_exact(3) {
            data.extend_from_slice(rgb);
            data.push(u8::MAX);
        }
        data
    };
    Ok(PixelBuffer::from_rgba(w, h, data)?)
}

/// Encode `pix` as lossless RGBA WebP.
pub fn write_webp<W: Write>(pix: &PixelBuffer, writer: W) -> IoResult<()> {
    let mut params = EncoderParams::default();
    params.use_predictor_transform = true;

    let mut encoder = WebPEncoder::new(writer);
    encoder.set_params(params);
    encoder
        .encode(pix.data(), pix.width(), pix.height(), ColorType::Rgba8)
        .map_err(|e| IoError::EncodeError(format!("webp: {e}")))
}
