//! Error types for the editing session

use thiserror::Error;

/// Errors returned by [`crate::Editor`] operations
///
/// A failed operation never changes the working image.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The operation needs a loaded image
    #[error("no image loaded")]
    NoImage,

    /// Core library error
    #[error(transparent)]
    Core(#[from] pixedit_core::Error),

    /// Loading, decoding or exporting failed
    #[error(transparent)]
    Io(#[from] pixedit_io::IoError),

    /// Invalid color adjustment
    #[error(transparent)]
    Color(#[from] pixedit_color::ColorError),

    /// Filter failed or was not found
    #[error(transparent)]
    Filter(#[from] pixedit_filter::FilterError),

    /// Crop or transform failed
    #[error(transparent)]
    Transform(#[from] pixedit_transform::TransformError),

    /// Snapshot could not be recorded or restored
    #[error(transparent)]
    History(#[from] pixedit_history::HistoryError),
}

/// Result type for editing session operations
pub type EditorResult<T> = Result<T, EditorError>;
