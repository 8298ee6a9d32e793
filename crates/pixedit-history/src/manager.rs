//! History manager

use crate::{HistoryError, HistoryResult};
use pixedit_core::PixelBuffer;
use pixedit_io::png::{read_png, write_png};
use std::collections::VecDeque;
use std::io::Cursor;
use tracing::{debug, warn};

/// Number of snapshots kept when no capacity is given
pub const DEFAULT_HISTORY_CAPACITY: usize = 30;

/// One recorded snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// PNG-encoded pixels
    pub encoded: Vec<u8>,
}

impl HistoryEntry {
    fn encode(pix: &PixelBuffer) -> HistoryResult<Self> {
        let mut encoded = Vec::new();
        write_png(pix, &mut encoded)?;
        Ok(Self {
            width: pix.width(),
            height: pix.height(),
            encoded,
        })
    }

    /// Decode the snapshot back into pixels.
    pub fn decode(&self) -> HistoryResult<PixelBuffer> {
        let pix = read_png(Cursor::new(&self.encoded))?;
        if pix.dimensions() != (self.width, self.height) {
            return Err(HistoryError::CorruptSnapshot {
                expected: (self.width, self.height),
                actual: pix.dimensions(),
            });
        }
        Ok(pix)
    }
}

/// Bounded linear undo/redo stack of encoded snapshots
///
/// `index` points at the entry that matches the current image. Entries
/// before it can be undone to, entries after it redone to.
#[derive(Debug)]
pub struct HistoryManager {
    entries: VecDeque<HistoryEntry>,
    index: usize,
    capacity: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            index: 0,
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl HistoryManager {
    /// Create an empty history holding at most `capacity` snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize) -> HistoryResult<Self> {
        if capacity == 0 {
            return Err(HistoryError::InvalidCapacity(capacity));
        }
        Ok(Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            index: 0,
            capacity,
        })
    }

    /// Record `pix` as the newest snapshot and return its index.
    ///
    /// Entries after the current index are discarded first. When the
    /// history is full the oldest snapshot is evicted.
    pub fn commit(&mut self, pix: &PixelBuffer) -> HistoryResult<usize> {
        let entry = HistoryEntry::encode(pix)?;

        if !self.entries.is_empty() {
            let dropped = self.entries.len() - (self.index + 1);
            if dropped > 0 {
                debug!(dropped, "discarding redo branch");
            }
            self.entries.truncate(self.index + 1);
        }
        self.entries.push_back(entry);

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            warn!(capacity = self.capacity, "history full, evicted oldest snapshot");
        }
        self.index = self.entries.len() - 1;

        debug!(
            index = self.index,
            len = self.entries.len(),
            bytes = self.memory_usage(),
            "committed snapshot"
        );
        Ok(self.index)
    }

    /// Step back one snapshot.
    ///
    /// Returns `Ok(None)` without changing anything when there is nothing
    /// to undo. If the snapshot fails to decode the index is left as is.
    pub fn undo(&mut self) -> HistoryResult<Option<PixelBuffer>> {
        if !self.can_undo() {
            return Ok(None);
        }
        let pix = self.entries[self.index - 1].decode()?;
        self.index -= 1;
        debug!(index = self.index, "undo");
        Ok(Some(pix))
    }

    /// Step forward one snapshot.
    ///
    /// Returns `Ok(None)` without changing anything when there is nothing
    /// to redo.
    pub fn redo(&mut self) -> HistoryResult<Option<PixelBuffer>> {
        if !self.can_redo() {
            return Ok(None);
        }
        let pix = self.entries[self.index + 1].decode()?;
        self.index += 1;
        debug!(index = self.index, "redo");
        Ok(Some(pix))
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Number of stored snapshots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the snapshot matching the current image
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }

    /// The snapshot at the current index, if any
    pub fn current_entry(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.index)
    }

    /// Total size of the encoded snapshots in bytes
    pub fn memory_usage(&self) -> usize {
        self.entries.iter().map(|e| e.encoded.len()).sum()
    }
}
