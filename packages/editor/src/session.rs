//! # Edit Session
//!
//! One editing surface: the outline text, its graph, and its history.
//!
//! Every text change goes through the same path: the pipeline recompiles the
//! graph, then the change is offered to history as a debounced recording.
//! Undo, redo and node operations push their result through that path inside
//! a [`without_recording`](EditSession::without_recording) scope, so history
//! never sees its own output as a fresh edit.

use crate::config::EditorConfig;
use crate::errors::EditorError;
use crate::history::History;
use crate::history_store::{HistoryStore, RecordOutcome};
use crate::node_ops::{Direction, NodeOpOutcome};
use crate::pipeline::Pipeline;
use mindmap_graph::GraphDocument;
use std::time::Instant;
use tracing::{debug, info};

/// What an event changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionChange {
    /// Outline text (and therefore the graph) changed
    pub text: bool,
    /// History snapshots or index changed (`can_undo`/`can_redo` may differ)
    pub history: bool,
}

impl SessionChange {
    pub fn is_empty(&self) -> bool {
        !self.text && !self.history
    }
}

pub struct EditSession {
    pipeline: Pipeline,
    history: HistoryStore,
}

impl EditSession {
    /// Create session with `initial` as the first history snapshot
    pub fn new(initial: impl Into<String>, config: &EditorConfig) -> Result<Self, EditorError> {
        let initial = initial.into();
        let options = config.compile_options()?;
        let history = History::with_max_undo_levels(initial.clone(), config.max_undo_levels);

        let session = Self {
            pipeline: Pipeline::new(initial, options),
            history: HistoryStore::with_history(history, config.history_delay()),
        };
        info!(
            nodes = session.graph().nodes.len(),
            delay_ms = config.history_delay_ms,
            "Edit session started"
        );
        Ok(session)
    }

    pub fn outline(&self) -> &str {
        self.pipeline.outline()
    }

    pub fn graph(&self) -> &GraphDocument {
        self.pipeline.graph()
    }

    /// Bumped on every change to the outline text
    pub fn version(&self) -> u64 {
        self.pipeline.version()
    }

    pub fn history(&self) -> &History {
        self.history.history()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// When [`poll`](Self::poll) next has something to commit
    pub fn next_deadline(&self) -> Option<Instant> {
        self.history.next_deadline()
    }

    /// The user edited the outline
    pub fn text_changed(&mut self, text: impl Into<String>, now: Instant) -> SessionChange {
        let text = text.into();
        if text == self.outline() {
            return SessionChange::default();
        }
        self.apply_text(text, now)
    }

    /// Whole-document undo
    pub fn undo(&mut self) -> SessionChange {
        match self.history.undo() {
            Some(text) => self.apply_from_history(text),
            None => SessionChange::default(),
        }
    }

    /// Whole-document redo
    pub fn redo(&mut self) -> SessionChange {
        match self.history.redo() {
            Some(text) => self.apply_from_history(text),
            None => SessionChange::default(),
        }
    }

    /// Undo/redo the single line owning `node_id`
    pub fn node_operation(&mut self, node_id: &str, direction: Direction) -> (NodeOpOutcome, SessionChange) {
        let (outcome, recorded) = self.history.node_operation(
            self.pipeline.outline(),
            node_id,
            direction,
            self.pipeline.options(),
        );
        let change = match &outcome {
            NodeOpOutcome::Applied(text) => {
                let text = text.clone();
                let change = self.without_recording(|session| session.apply_text(text, Instant::now()));
                SessionChange {
                    history: recorded == RecordOutcome::Committed,
                    ..change
                }
            }
            NodeOpOutcome::NoOp(_) => SessionChange::default(),
        };
        (outcome, change)
    }

    /// Commit pending typing if its delay has passed
    pub fn poll(&mut self, now: Instant) -> SessionChange {
        let outcome = self.history.poll(now);
        if outcome == RecordOutcome::Committed {
            debug!(index = self.history().index(), "Committed typing to history");
        }
        SessionChange {
            text: false,
            history: outcome == RecordOutcome::Committed,
        }
    }

    /// End the session; a pending commit never fires
    pub fn teardown(&mut self) {
        self.history.teardown();
        info!(version = self.version(), snapshots = self.history().len(), "Edit session closed");
    }

    /// Run `f` with history recording paused
    pub fn without_recording<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.history.pause_recording();
        let result = f(self);
        self.history.resume_recording();
        result
    }

    fn apply_from_history(&mut self, text: String) -> SessionChange {
        let change = self.without_recording(|session| session.apply_text(text, Instant::now()));
        SessionChange {
            history: true,
            ..change
        }
    }

    fn apply_text(&mut self, text: String, now: Instant) -> SessionChange {
        let changed = self.pipeline.apply_text(text);
        if !changed {
            return SessionChange::default();
        }

        let recorded = self.history.record_debounced(self.pipeline.outline(), now);
        debug!(version = self.version(), ?recorded, "Outline changed");
        SessionChange {
            text: true,
            history: recorded == RecordOutcome::Committed,
        }
    }
}
