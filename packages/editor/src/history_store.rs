//! # History Store
//!
//! [`History`] plus the two ways text reaches it:
//!
//! - **Debounced**: typing is coalesced; a snapshot is committed once no new
//!   text has arrived for the configured delay (one entry per editing burst).
//! - **Immediate**: committed on the spot (node-scoped undo/redo).
//!
//! Recording can be paused for a lexical scope with
//! [`HistoryStore::without_recording`]. Text changes that are themselves the
//! result of an undo/redo are applied inside such a scope, so they are never
//! recorded again as forward edits.

use crate::debounce::Debouncer;
use crate::history::History;
use crate::node_ops::{resolve_node_operation, Direction, NoOpReason, NodeOpOutcome};
use mindmap_graph::CompileOptions;
use std::time::{Duration, Instant};
use tracing::debug;

/// Pause between keystrokes after which typing is committed
pub const DEFAULT_HISTORY_DELAY: Duration = Duration::from_millis(800);

/// Result of offering text to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new snapshot was appended
    Committed,
    /// Waiting for the debounce delay
    Scheduled,
    /// Text equals the current snapshot
    Unchanged,
    /// Recording is paused
    Suppressed,
    /// Nothing was pending
    Idle,
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    history: History,
    pending: Debouncer<String>,
    suppress_depth: usize,
}

impl HistoryStore {
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_history(History::new(initial), DEFAULT_HISTORY_DELAY)
    }

    pub fn with_history(history: History, delay: Duration) -> Self {
        Self {
            history,
            pending: Debouncer::new(delay),
            suppress_depth: 0,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current(&self) -> &str {
        self.history.current()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// When the pending debounced commit is due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.deadline()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn is_recording_suppressed(&self) -> bool {
        self.suppress_depth > 0
    }

    /// Commit `text` now. Any pending debounced commit is dropped, since
    /// `text` is newer than what it was holding.
    pub fn record_immediate(&mut self, text: impl Into<String>) -> RecordOutcome {
        if self.is_recording_suppressed() {
            return RecordOutcome::Suppressed;
        }
        self.pending.cancel();

        if self.history.record(text) {
            RecordOutcome::Committed
        } else {
            RecordOutcome::Unchanged
        }
    }

    /// Commit `text` once `delay` passes without another call.
    ///
    /// Replaces any commit still waiting.
    pub fn record_debounced(&mut self, text: impl Into<String>, now: Instant) -> RecordOutcome {
        if self.is_recording_suppressed() {
            return RecordOutcome::Suppressed;
        }
        if self.pending.schedule(text.into(), now).is_some() {
            debug!("Superseded pending history commit");
        }
        RecordOutcome::Scheduled
    }

    /// Fire the pending debounced commit if it is due
    pub fn poll(&mut self, now: Instant) -> RecordOutcome {
        let Some(text) = self.pending.poll(now) else {
            return RecordOutcome::Idle;
        };

        if self.history.record(text) {
            RecordOutcome::Committed
        } else {
            RecordOutcome::Unchanged
        }
    }

    /// Drop the pending debounced commit, if any
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.cancel().is_some()
    }

    /// Step back one snapshot and return its text.
    ///
    /// A pending debounced commit is dropped.
    pub fn undo(&mut self) -> Option<String> {
        if !self.history.can_undo() {
            return None;
        }
        self.pending.cancel();
        self.history.undo().map(str::to_owned)
    }

    /// Step forward one snapshot and return its text.
    ///
    /// A pending debounced commit is dropped.
    pub fn redo(&mut self) -> Option<String> {
        if !self.history.can_redo() {
            return None;
        }
        self.pending.cancel();
        self.history.redo().map(str::to_owned)
    }

    /// Undo/redo a single node of `current` and commit the result immediately.
    ///
    /// The [`RecordOutcome`] is `Unchanged` when the new text already is the
    /// current snapshot, and `Idle` when nothing was applied.
    pub fn node_operation(
        &mut self,
        current: &str,
        node_id: &str,
        direction: Direction,
        options: &CompileOptions,
    ) -> (NodeOpOutcome, RecordOutcome) {
        if self.is_recording_suppressed() {
            return (NodeOpOutcome::NoOp(NoOpReason::Suppressed), RecordOutcome::Suppressed);
        }

        let outcome = resolve_node_operation(current, &self.history, node_id, direction, options);
        let recorded = match &outcome {
            NodeOpOutcome::Applied(text) => self.record_immediate(text.as_str()),
            NodeOpOutcome::NoOp(_) => RecordOutcome::Idle,
        };
        (outcome, recorded)
    }

    /// Run `f` with recording paused. Scopes nest.
    pub fn without_recording<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.pause_recording();
        let result = f(self);
        self.resume_recording();
        result
    }

    pub(crate) fn pause_recording(&mut self) {
        self.suppress_depth += 1;
    }

    pub(crate) fn resume_recording(&mut self) {
        self.suppress_depth = self.suppress_depth.saturating_sub(1);
    }

    /// Cancel the pending commit so nothing fires after the session ends
    pub fn teardown(&mut self) {
        if self.cancel_pending() {
            debug!("Dropped pending history commit on teardown");
        }
    }
}
