//! Error types for pixedit-history

use thiserror::Error;

/// Errors that can occur while recording or restoring snapshots
#[derive(Debug, Error)]
pub enum HistoryError {
    /// A snapshot could not be encoded or decoded
    #[error("snapshot error: {0}")]
    Snapshot(#[from] pixedit_io::IoError),

    /// History must hold at least one entry
    #[error("invalid history capacity: {0}")]
    InvalidCapacity(usize),

    /// A decoded snapshot does not match its recorded size
    #[error("corrupt snapshot: expected {expected:?}, decoded {actual:?}")]
    CorruptSnapshot {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

/// Result type for history operations
pub type HistoryResult<T> = Result<T, HistoryError>;
