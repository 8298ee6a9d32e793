//! pixedit-io - Image loading and export
//!
//! Decodes image sources into RGBA8 [`PixelBuffer`]s and encodes buffers
//! back to PNG, JPEG or WebP bytes.
//!
//! Supported input formats (each behind a cargo feature, all on by default):
//!
//! - PNG (`png-format`): every color type and bit depth
//! - JPEG (`jpeg`): grayscale, RGB, CMYK
//! - GIF (`gif-format`): first frame only
//! - WebP (`webp-format`): lossy and lossless, static only
//!
//! HTTP(S) URL sources need the `remote` feature.

mod error;
pub mod format;
pub mod source;

#[cfg(feature = "gif-format")]
pub mod gif;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "webp-format")]
pub mod webp;

pub use error::{IoError, IoResult};
pub use format::{ExportFormat, ImageFormat, detect_format_from_bytes};
pub use source::ImageSource;

use pixedit_core::PixelBuffer;
use std::io::Cursor;
use tracing::debug;

/// Load and decode an image from any [`ImageSource`].
///
/// # Errors
///
/// - [`IoError::Load`] / [`IoError::Io`] if the source cannot be read
/// - [`IoError::UnsupportedFormat`] if the bytes are not a known format
/// - [`IoError::DecodeError`] if the data is corrupt
pub fn load_image(source: &ImageSource) -> IoResult<PixelBuffer> {
    match source {
        ImageSource::Bytes(bytes) => decode_image(bytes),
        other => decode_image(&other.fetch()?),
    }
}

/// Decode encoded image bytes into an RGBA8 buffer at natural resolution.
pub fn decode_image(data: &[u8]) -> IoResult<PixelBuffer> {
    let format = detect_format_from_bytes(data)?;
    let pix = match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data))?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data))?,
        #[cfg(feature = "gif-format")]
        ImageFormat::Gif => gif::read_gif(Cursor::new(data))?,
        #[cfg(feature = "webp-format")]
        ImageFormat::WebP => webp::read_webp(Cursor::new(data))?,
        ImageFormat::Unknown => {
            return Err(IoError::UnsupportedFormat(
                "unrecognized image header".to_string(),
            ));
        }
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} support not enabled",
                other
            )));
        }
    };
    debug!(
        ?format,
        width = pix.width(),
        height = pix.height(),
        bytes = data.len(),
        "decoded image"
    );
    Ok(pix)
}

/// Encode a buffer as `format`.
///
/// `quality` must lie in [0, 1]. PNG and WebP output is lossless and ignores
/// it; JPEG maps it to the encoder's 1..=100 scale. Encoding is
/// deterministic: the same buffer and arguments always give the same bytes.
///
/// # Errors
///
/// - [`IoError::InvalidData`] if `quality` is outside [0, 1] or not finite
/// - [`IoError::UnsupportedFormat`] if the format's feature is disabled
/// - [`IoError::EncodeError`] if the encoder fails
pub fn export_image(pix: &PixelBuffer, format: ExportFormat, quality: f32) -> IoResult<Vec<u8>> {
    if !(0.0..=1.0).contains(&quality) {
        return Err(IoError::InvalidData(format!(
            "export quality must be in [0, 1], got {quality}"
        )));
    }

    let bytes = match format {
        #[cfg(feature = "png-format")]
        ExportFormat::Png => {
            let mut out = Vec::new();
            png::write_png(pix, &mut out)?;
            out
        }
        #[cfg(feature = "jpeg")]
        ExportFormat::Jpeg => jpeg::write_jpeg(pix, quality)?,
        #[cfg(feature = "webp-format")]
        ExportFormat::Webp => {
            let mut out = Vec::new();
            webp::write_webp(pix, &mut out)?;
            out
        }
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "{other} export not enabled"
            )));
        }
    };
    debug!(%format, quality, bytes = bytes.len(), "exported image");
    Ok(bytes)
}
