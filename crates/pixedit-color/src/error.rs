//! Error types for pixedit-color

use thiserror::Error;

/// Errors that can occur during color adjustment
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixedit_core::Error),

    /// Adjustment value outside its accepted range
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
