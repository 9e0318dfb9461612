//! # Snapshot History
//!
//! Linear undo/redo over whole-outline snapshots.
//!
//! ## Design
//!
//! - `snapshots[index]` is the current text; `0 <= index < len` always holds
//! - Undo/redo only move `index`
//! - Recording while `index` is not at the tip discards every later snapshot
//! - Recording the current text again is a no-op, so adjacent snapshots differ
//!
//! ## Example
//!
//! ```rust
//! use mindmap_editor::History;
//!
//! let mut history = History::new("X");
//! history.record("Y");
//! assert_eq!(history.undo(), Some("X"));
//! history.record("Z");
//! assert_eq!(history.snapshots(), ["X", "Z"]);
//! ```

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<String>,
    index: usize,

    /// Maximum number of undo steps kept (0 = unlimited)
    max_undo_levels: usize,
}

impl History {
    /// Create a history holding only `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_max_undo_levels(initial, 0)
    }

    /// Create a history that keeps at most `max_undo_levels` steps behind the tip
    pub fn with_max_undo_levels(initial: impl Into<String>, max_undo_levels: usize) -> Self {
        Self {
            snapshots: vec![initial.into()],
            index: 0,
            max_undo_levels,
        }
    }

    /// Text at the current index
    pub fn current(&self) -> &str {
        &self.snapshots[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: a history always holds at least one snapshot
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[String] {
        &self.snapshots
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.snapshots.get(index).map(String::as_str)
    }

    /// Snapshot an undo would return to
    pub fn previous(&self) -> Option<&str> {
        self.index.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Snapshot a redo would advance to
    pub fn next(&self) -> Option<&str> {
        self.get(self.index + 1)
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Record `text` as the new current snapshot.
    ///
    /// Returns `false` (and changes nothing) when `text` equals the current
    /// snapshot. Otherwise every snapshot after the current one is discarded.
    pub fn record(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.current() {
            return false;
        }

        let discarded = self.snapshots.len() - (self.index + 1);
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(text);
        self.index = self.snapshots.len() - 1;

        if self.max_undo_levels > 0 && self.index > self.max_undo_levels {
            let excess = self.index - self.max_undo_levels;
            self.snapshots.drain(..excess);
            self.index -= excess;
        }

        debug!(index = self.index, len = self.snapshots.len(), discarded, "Recorded snapshot");
        true
    }

    /// Step back one snapshot
    pub fn undo(&mut self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Step forward one snapshot
    pub fn redo(&mut self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}
