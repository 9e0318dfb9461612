//! # Mindmap Workspace
//!
//! Runs an [`EditSession`](mindmap_editor::EditSession) behind a single-writer
//! tokio actor so many producers (stdin, file watcher, network) can drive one
//! outline without locks.

pub mod actor;
pub mod errors;
pub mod protocol;
pub mod update;
pub mod watcher;

pub use actor::{spawn_session, SessionCommand, SessionHandle};
pub use errors::{WorkspaceError, WorkspaceResult};
pub use protocol::{dispatch, parse_line, ClientMessage, Reply};
pub use update::GraphUpdate;
pub use watcher::FileWatcher;
