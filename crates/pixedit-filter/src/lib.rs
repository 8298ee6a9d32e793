//! pixedit-filter - Image filtering operations
//!
//! This crate provides the filters of the editing engine:
//!
//! - 3x3 convolution (sharpen, emboss) over the interior of the image
//! - Sobel edge magnitude
//! - Separable Gaussian blur
//! - Per-pixel tone filters (grayscale, sepia, invert)
//! - A registry of named filters ([`FILTERS`], [`FilterKind`])
//!
//! Every filter takes the input by reference and returns a new buffer.

pub mod blur;
pub mod convolve;
pub mod edge;
mod error;
pub mod kernel;
pub mod registry;
pub mod tone;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel3;

pub use blur::{MAX_BLUR_RADIUS, gaussian_blur};
pub use convolve::{convolve3, emboss, sharpen};
pub use edge::sobel_edge;
pub use registry::{
    DEFAULT_BLUR_RADIUS, DEFAULT_SHARPEN_INTENSITY, FILTERS, FilterDescriptor, FilterKind,
    apply_filter,
};
pub use tone::{grayscale, invert, sepia};
