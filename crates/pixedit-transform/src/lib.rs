//! pixedit-transform - Geometric transformations
//!
//! This crate provides the geometric stage of the editing engine:
//!
//! - Cropping to a rectangle ([`crop`])
//! - Affine transformation matrices ([`AffineMatrix`])
//! - Interpolated and sampled affine warps ([`affine`], [`affine_sampled`])
//! - The pan / zoom / rotate / flip view state ([`TransformState`]) and its
//!   application to an image ([`transform`])
//!
//! Warps keep the source canvas size; content moved outside it is clipped
//! and uncovered areas become transparent black.

pub mod affine;
pub mod crop;
mod error;
pub mod state;

pub use affine::{AffineMatrix, Point, affine, affine_sampled};
pub use crop::{CropArea, crop};
pub use error::{TransformError, TransformResult};
pub use state::{Interpolation, TransformState, transform, transform_with};
