//! pixedit-history - Bounded linear undo/redo history
//!
//! Snapshots are stored PNG-encoded, so restoring one is lossless and the
//! memory held per entry is usually far below the raw RGBA size.
//!
//! The history is a single line of entries with a cursor:
//!
//! - committing after an undo discards the entries ahead of the cursor
//! - the oldest entry is evicted once the capacity is exceeded
//! - undo at the first entry and redo at the last are silent no-ops

mod error;
mod manager;

pub use error::{HistoryError, HistoryResult};
pub use manager::{DEFAULT_HISTORY_CAPACITY, HistoryEntry, HistoryManager};
