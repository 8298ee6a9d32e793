//! pixedit - Non-destructive raster image editing engine
//!
//! Loads a photo, applies color adjustments, filters and geometric
//! transforms, keeps a bounded undo/redo history and exports PNG, JPEG or
//! WebP bytes.
//!
//! # Overview
//!
//! - [`Editor`]: one editing session over one image
//! - [`EditorConfig`]: history capacity and transform interpolation
//! - The stage crates, re-exported as modules: [`io`], [`color`],
//!   [`filter`], [`transform`], [`history`]
//!
//! # Example
//!
//! ```
//! use pixedit::{Editor, ExportFormat, FilterKind, ImageSource, PixelBuffer};
//!
//! let pix = PixelBuffer::filled(8, 8, [200, 40, 40, 255]).unwrap();
//! let png = pixedit::io::export_image(&pix, ExportFormat::Png, 1.0).unwrap();
//!
//! let mut editor = Editor::default();
//! editor.load(&ImageSource::from(png)).unwrap();
//! editor.apply_filter(FilterKind::Grayscale).unwrap();
//! editor.commit().unwrap();
//! assert!(editor.undo().unwrap());
//! let jpeg = editor.export(ExportFormat::Jpeg, 0.9).unwrap();
//! assert!(!jpeg.is_empty());
//! ```

mod config;
mod editor;
mod error;

// Re-export core types (primary data structures used everywhere)
pub use pixedit_core::*;

// Re-export stage crates as modules to avoid name conflicts
pub use pixedit_color as color;
pub use pixedit_filter as filter;
pub use pixedit_history as history;
pub use pixedit_io as io;
pub use pixedit_transform as transform;

pub use config::{ENV_HISTORY_CAPACITY, ENV_INTERPOLATION, EditorConfig};
pub use editor::{Editor, SessionState};
pub use error::{EditorError, EditorResult};

// Types needed to drive an Editor
pub use pixedit_color::ColorAdjustments;
pub use pixedit_filter::{FILTERS, FilterDescriptor, FilterKind};
pub use pixedit_io::{ExportFormat, ImageSource};
pub use pixedit_transform::{CropArea, Interpolation, TransformState};
