//! Single-writer session actor.
//!
//! One tokio task owns the [`EditSession`]. Handles send commands over a
//! bounded channel; the task applies them strictly in arrival order and
//! broadcasts a [`GraphUpdate`] after every change. The only timer is the
//! history debounce deadline, awaited alongside the command channel.

use crate::errors::WorkspaceResult;
use crate::update::GraphUpdate;
use mindmap_editor::{Direction, EditSession, EditorConfig, NodeOpOutcome, SessionChange};
use std::time::Instant;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

const COMMAND_BUFFER: usize = 64;
const UPDATE_BUFFER: usize = 64;

#[derive(Debug)]
pub enum SessionCommand {
    TextChanged {
        text: String,
    },
    Undo,
    Redo,
    NodeOperation {
        node_id: String,
        direction: Direction,
        reply: oneshot::Sender<NodeOpOutcome>,
    },
    Snapshot {
        reply: oneshot::Sender<GraphUpdate>,
    },
    Shutdown {
        reply: oneshot::Sender<()>,
    },
}

/// Cloneable handle to a running session
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
    updates: broadcast::Sender<GraphUpdate>,
}

impl SessionHandle {
    /// Receive a [`GraphUpdate`] after every change from now on
    pub fn subscribe(&self) -> broadcast::Receiver<GraphUpdate> {
        self.updates.subscribe()
    }

    pub async fn text_changed(&self, text: impl Into<String>) -> WorkspaceResult<()> {
        self.commands
            .send(SessionCommand::TextChanged { text: text.into() })
            .await?;
        Ok(())
    }

    pub async fn undo(&self) -> WorkspaceResult<()> {
        self.commands.send(SessionCommand::Undo).await?;
        Ok(())
    }

    pub async fn redo(&self) -> WorkspaceResult<()> {
        self.commands.send(SessionCommand::Redo).await?;
        Ok(())
    }

    pub async fn node_operation(
        &self,
        node_id: impl Into<String>,
        direction: Direction,
    ) -> WorkspaceResult<NodeOpOutcome> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(SessionCommand::NodeOperation {
                node_id: node_id.into(),
                direction,
                reply,
            })
            .await?;
        Ok(response.await?)
    }

    /// Current state, without waiting for a change
    pub async fn snapshot(&self) -> WorkspaceResult<GraphUpdate> {
        let (reply, response) = oneshot::channel();
        self.commands.send(SessionCommand::Snapshot { reply }).await?;
        Ok(response.await?)
    }

    /// Stop the session. Resolves once it has been torn down.
    pub async fn shutdown(&self) -> WorkspaceResult<()> {
        let (reply, response) = oneshot::channel();
        self.commands.send(SessionCommand::Shutdown { reply }).await?;
        Ok(response.await?)
    }

    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }
}

/// Start a session on the current tokio runtime
pub fn spawn_session(initial: impl Into<String>, config: &EditorConfig) -> WorkspaceResult<SessionHandle> {
    let session = EditSession::new(initial, config)?;
    let (commands, receiver) = mpsc::channel(COMMAND_BUFFER);
    let (updates, _) = broadcast::channel(UPDATE_BUFFER);

    tokio::spawn(run(session, receiver, updates.clone()));
    Ok(SessionHandle { commands, updates })
}

async fn run(
    mut session: EditSession,
    mut commands: mpsc::Receiver<SessionCommand>,
    updates: broadcast::Sender<GraphUpdate>,
) {
    let mut shutdown_reply = None;

    loop {
        let deadline = session.next_deadline();
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    debug!("All session handles dropped");
                    break;
                };
                // A commit that came due while we were busy goes first
                let due = session.poll(Instant::now());
                publish(&session, due, &updates);

                if let SessionCommand::Shutdown { reply } = command {
                    shutdown_reply = Some(reply);
                    break;
                }
                apply(&mut session, command, &updates);
            }
            _ = sleep_until(deadline) => {
                let change = session.poll(Instant::now());
                publish(&session, change, &updates);
            }
        }
    }

    session.teardown();
    if let Some(reply) = shutdown_reply {
        let _ = reply.send(());
    }
    info!("Session actor stopped");
}

fn apply(session: &mut EditSession, command: SessionCommand, updates: &broadcast::Sender<GraphUpdate>) {
    match command {
        SessionCommand::TextChanged { text } => {
            let change = session.text_changed(text, Instant::now());
            publish(session, change, updates);
        }
        SessionCommand::Undo => {
            let change = session.undo();
            publish(session, change, updates);
        }
        SessionCommand::Redo => {
            let change = session.redo();
            publish(session, change, updates);
        }
        SessionCommand::NodeOperation {
            node_id,
            direction,
            reply,
        } => {
            let (outcome, change) = session.node_operation(&node_id, direction);
            publish(session, change, updates);
            let _ = reply.send(outcome);
        }
        SessionCommand::Snapshot { reply } => {
            let _ = reply.send(GraphUpdate::from_session(session));
        }
        SessionCommand::Shutdown { .. } => {}
    }
}

fn publish(session: &EditSession, change: SessionChange, updates: &broadcast::Sender<GraphUpdate>) {
    if change.is_empty() {
        return;
    }
    debug!(version = session.version(), ?change, "Broadcasting graph update");
    // No subscribers is fine
    let _ = updates.send(GraphUpdate::from_session(session));
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}
