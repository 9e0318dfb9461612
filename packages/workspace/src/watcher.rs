use crate::errors::WorkspaceResult;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};
use tracing::debug;

/// Watches one outline file for changes.
///
/// The parent directory is watched so editors that save by replacing the
/// file are still seen.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<Event>>,
    path: PathBuf,
}

impl FileWatcher {
    pub fn new(path: impl Into<PathBuf>) -> WorkspaceResult<Self> {
        let path = path.into();
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        debug!(path = %path.display(), dir = %dir.display(), "Watching outline file");

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Block until the file changes. `None` once the watcher has stopped.
    pub fn next_change(&self) -> Option<Event> {
        loop {
            match self.receiver.recv() {
                Ok(Ok(event)) if self.is_relevant(&event) => return Some(event),
                Ok(Ok(_)) => continue,
                Ok(Err(e)) => debug!(error = %e, "Watch error"),
                Err(_) => return None,
            }
        }
    }

    /// Like [`next_change`](Self::next_change), giving up after `timeout`
    pub fn next_change_timeout(&self, timeout: Duration) -> Option<Event> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(remaining) {
                Ok(Ok(event)) if self.is_relevant(&event) => return Some(event),
                Ok(Ok(_)) => continue,
                Ok(Err(e)) => debug!(error = %e, "Watch error"),
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    /// Discard queued events; a single save often produces several
    pub fn drain(&self) -> usize {
        self.receiver.try_iter().count()
    }

    fn is_relevant(&self, event: &Event) -> bool {
        let changed = matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        );
        changed
            && event
                .paths
                .iter()
                .any(|p| p.file_name().is_some() && p.file_name() == self.path.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;

    #[test]
    fn test_file_watcher() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("outline.txt");
        fs::write(&file, "A").unwrap();

        let watcher = FileWatcher::new(file.clone()).unwrap();
        assert_eq!(watcher.path(), file.as_path());

        let target = file.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            fs::write(target, "A\n\tB").unwrap();
        });

        let event = watcher.next_change_timeout(Duration::from_secs(5));
        assert!(event.is_some());
    }

    #[test]
    fn test_other_files_are_ignored() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("outline.txt");
        fs::write(&file, "A").unwrap();

        let watcher = FileWatcher::new(file).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "unrelated").unwrap();

        assert!(watcher.next_change_timeout(Duration::from_millis(300)).is_none());
    }
}
