//! # Node-Scoped Undo/Redo
//!
//! Undoes or redoes a single topic by copying its line from the adjacent
//! history snapshot into the current outline. Every other line is left alone.
//!
//! The node id only carries a line index, so if lines were inserted or removed
//! between the two snapshots the copied line may belong to a different topic.
//! Nothing here tries to detect that.

use crate::history::History;
use mindmap_graph::CompileOptions;
use mindmap_parser::{join_lines, split_lines, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Undo,
    Redo,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Undo => f.write_str("undo"),
            Direction::Redo => f.write_str("redo"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undo" => Ok(Direction::Undo),
            "redo" => Ok(Direction::Redo),
            other => Err(format!("unknown direction '{}': expected 'undo' or 'redo'", other)),
        }
    }
}

/// Why a node operation did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoOpReason {
    /// The id does not name an outline line
    InvalidNodeId,
    /// The line index is past the end of the current outline
    LineOutOfRange,
    /// No topic of the outline has this id
    NodeNotFound,
    /// Nothing to undo/redo in the history
    NoHistory,
    /// The comparison snapshot is too short to have this line
    LineNotInSnapshot,
    /// The substitution left the outline as it was
    Unchanged,
    /// Called while history recording is paused
    Suppressed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeOpOutcome {
    /// New outline text
    Applied(String),
    NoOp(NoOpReason),
}

impl NodeOpOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, NodeOpOutcome::Applied(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            NodeOpOutcome::Applied(text) => Some(text),
            NodeOpOutcome::NoOp(_) => None,
        }
    }
}

/// Work out the outline produced by undoing/redoing one node.
///
/// Pure: neither `history` nor `current` is modified.
pub fn resolve_node_operation(
    current: &str,
    history: &History,
    node_id: &str,
    direction: Direction,
    options: &CompileOptions,
) -> NodeOpOutcome {
    let outcome = resolve(current, history, node_id, direction, options);
    debug!(node_id, %direction, ?outcome, "Resolved node operation");
    outcome
}

fn resolve(
    current: &str,
    history: &History,
    node_id: &str,
    direction: Direction,
    options: &CompileOptions,
) -> NodeOpOutcome {
    let Some(line) = node_id.parse::<NodeId>().ok().and_then(|id| id.line()) else {
        return NodeOpOutcome::NoOp(NoOpReason::InvalidNodeId);
    };

    let mut lines = split_lines(current);
    if line >= lines.len() {
        return NodeOpOutcome::NoOp(NoOpReason::LineOutOfRange);
    }

    let id = NodeId::Line(line);
    // Every top-level topic counts, rendered or not
    if !options.parser.build_forest(current).iter().any(|root| root.contains(id)) {
        return NodeOpOutcome::NoOp(NoOpReason::NodeNotFound);
    }

    let comparison = match direction {
        Direction::Undo => history.previous(),
        Direction::Redo => history.next(),
    };
    let Some(comparison) = comparison else {
        return NodeOpOutcome::NoOp(NoOpReason::NoHistory);
    };

    let Some(replacement) = split_lines(comparison).get(line).copied() else {
        return NodeOpOutcome::NoOp(NoOpReason::LineNotInSnapshot);
    };
    lines[line] = replacement;

    let updated = join_lines(&lines);
    if updated == current {
        NodeOpOutcome::NoOp(NoOpReason::Unchanged)
    } else {
        NodeOpOutcome::Applied(updated)
    }
}
