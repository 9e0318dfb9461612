//! JSON-lines protocol for driving a session over a byte stream.
//!
//! Clients write one [`ClientMessage`] per line:
//!
//! ```text
//! {"type":"textChanged","text":"Root\n\tIdea"}
//! {"type":"nodeOperation","nodeId":"node-1","direction":"undo"}
//! {"type":"undo"}
//! ```
//!
//! The session answers with one [`GraphUpdate`] per line.

use crate::actor::SessionHandle;
use crate::errors::WorkspaceResult;
use crate::update::GraphUpdate;
use mindmap_editor::{Direction, NodeOpOutcome};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    TextChanged {
        text: String,
    },
    Undo,
    Redo,
    #[serde(rename_all = "camelCase")]
    NodeOperation {
        node_id: String,
        direction: Direction,
    },
    Snapshot,
    Shutdown,
}

/// What the caller should do after a message was handled
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Updates (if any) arrive through the subscription
    None,
    /// Write this state back to the client
    Snapshot(GraphUpdate),
    NodeOperation(NodeOpOutcome),
    /// Session is gone; stop reading
    Closed,
}

/// Parse one input line. Blank lines are skipped.
pub fn parse_line(line: &str) -> WorkspaceResult<Option<ClientMessage>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(line)?))
}

/// Forward a client message to the session
pub async fn dispatch(handle: &SessionHandle, message: ClientMessage) -> WorkspaceResult<Reply> {
    debug!(?message, "Dispatching client message");
    let reply = match message {
        ClientMessage::TextChanged { text } => {
            handle.text_changed(text).await?;
            Reply::None
        }
        ClientMessage::Undo => {
            handle.undo().await?;
            Reply::None
        }
        ClientMessage::Redo => {
            handle.redo().await?;
            Reply::None
        }
        ClientMessage::NodeOperation { node_id, direction } => {
            Reply::NodeOperation(handle.node_operation(node_id, direction).await?)
        }
        ClientMessage::Snapshot => Reply::Snapshot(handle.snapshot().await?),
        ClientMessage::Shutdown => {
            handle.shutdown().await?;
            Reply::Closed
        }
    };
    Ok(reply)
}
