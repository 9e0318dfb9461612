use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Edit session has shut down")]
    SessionClosed,

    #[error("Invalid client message: {0}")]
    Protocol(#[from] serde_json::Error),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),

    #[error(transparent)]
    Editor(#[from] mindmap_editor::EditorError),
}

pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for WorkspaceError {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        WorkspaceError::SessionClosed
    }
}

impl From<tokio::sync::oneshot::error::RecvError> for WorkspaceError {
    fn from(_: tokio::sync::oneshot::error::RecvError) -> Self {
        WorkspaceError::SessionClosed
    }
}
