//! Image sources
//!
//! An [`ImageSource`] is anything the host can hand the engine to load:
//! encoded bytes (e.g. from a file picker), a filesystem path, or a URL.
//! `file://` URLs are read locally; `http(s)://` URLs are fetched only when
//! the `remote` feature is enabled. Every fetch failure is reported as
//! [`IoError::Load`] so callers can tell "could not reach the image" apart
//! from "could not decode it".

use crate::{IoError, IoResult};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// Where an image comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Already-encoded image bytes
    Bytes(Vec<u8>),
    /// A file on the local filesystem
    Path(PathBuf),
    /// A `file://`, `http://` or `https://` URL
    Url(String),
}

impl fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(b) => write!(f, "Bytes({} bytes)", b.len()),
            Self::Path(p) => f.debug_tuple("Path").field(p).finish(),
            Self::Url(u) => f.debug_tuple("Url").field(u).finish(),
        }
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for ImageSource {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl ImageSource {
    /// Build a URL source.
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Resolve the source to encoded bytes.
    ///
    /// # Errors
    ///
    /// - [`IoError::Io`] if a path cannot be read
    /// - [`IoError::Load`] if a URL is malformed, uses an unsupported
    ///   scheme, or cannot be fetched
    pub fn fetch(&self) -> IoResult<Vec<u8>> {
        match self {
            Self::Bytes(bytes) => Ok(bytes.clone()),
            Self::Path(path) => {
                debug!(path = %path.display(), "reading image file");
                Ok(std::fs::read(path)?)
            }
            Self::Url(raw) => fetch_url(raw),
        }
    }
}

fn fetch_url(raw: &str) -> IoResult<Vec<u8>> {
    let url = Url::parse(raw).map_err(|e| IoError::Load(format!("invalid URL {raw}: {e}")))?;

    match url.scheme() {
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|_| IoError::Load(format!("not a local file URL: {raw}")))?;
            debug!(path = %path.display(), "reading file URL");
            std::fs::read(&path).map_err(|e| IoError::Load(format!("{}: {e}", path.display())))
        }
        "http" | "https" => fetch_http(&url),
        other => Err(IoError::Load(format!("unsupported URL scheme: {other}"))),
    }
}

#[cfg(feature = "remote")]
fn fetch_http(url: &Url) -> IoResult<Vec<u8>> {
    debug!(%url, "fetching remote image");
    let response = reqwest::blocking::get(url.as_str())
        .map_err(|e| IoError::Load(format!("request to {url} failed: {e}")))?;
    let status = response.status();
    if !status.is_success() {
        return Err(IoError::Load(format!("{url} returned HTTP {status}")));
    }
    let bytes = response
        .bytes()
        .map_err(|e| IoError::Load(format!("reading body of {url} failed: {e}")))?;
    Ok(bytes.to_vec())
}

#[cfg(not(feature = "remote"))]
fn fetch_http(url: &Url) -> IoResult<Vec<u8>> {
    Err(IoError::Load(format!(
        "remote sources are disabled (enable the `remote` feature): {url}"
    )))
}
