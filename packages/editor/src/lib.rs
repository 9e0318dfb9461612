//! # Mindmap Editor
//!
//! Editing engine for mindmap outlines: a compiled graph kept in step with
//! the outline text, plus a linear history with two undo granularities.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ parser: outline text → topic tree           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ graph: tree → positioned nodes + edges      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Pipeline: recompile on every text change │
//! │  - HistoryStore: debounced snapshots        │
//! │  - Document undo/redo                       │
//! │  - Node (single line) undo/redo             │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Text is source of truth**: the graph is always derived from it
//! 2. **One history**: node operations are ordinary immediate snapshots
//! 3. **Injected time**: the session never reads a clock for debouncing;
//!    callers pass `now` and call `poll` at `next_deadline`
//!
//! ## Usage
//!
//! ```rust
//! use mindmap_editor::{EditSession, EditorConfig, Direction};
//! use std::time::{Duration, Instant};
//!
//! let mut session = EditSession::new("Root\n\tIdea", &EditorConfig::default())?;
//! let t0 = Instant::now();
//!
//! // Typing is compiled at once and committed to history after a pause
//! session.text_changed("Root\n\tBetter idea", t0);
//! session.poll(t0 + Duration::from_millis(800));
//! assert!(session.can_undo());
//!
//! // Revert just that topic
//! let (outcome, _) = session.node_operation("node-1", Direction::Undo);
//! assert!(outcome.is_applied());
//! assert_eq!(session.outline(), "Root\n\tIdea");
//! # Ok::<(), mindmap_editor::EditorError>(())
//! ```

mod config;
mod debounce;
mod errors;
mod history;
mod history_store;
mod node_ops;
mod pipeline;
mod session;

pub use config::EditorConfig;
pub use debounce::Debouncer;
pub use errors::EditorError;
pub use history::History;
pub use history_store::{HistoryStore, RecordOutcome, DEFAULT_HISTORY_DELAY};
pub use node_ops::{resolve_node_operation, Direction, NoOpReason, NodeOpOutcome};
pub use pipeline::Pipeline;
pub use session::{EditSession, SessionChange};

// Re-export common types for convenience
pub use mindmap_graph::{CompileOptions, GraphDocument};
