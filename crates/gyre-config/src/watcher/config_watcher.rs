//! Core config file watcher implementation.
//!
//! Contains the [`ConfigWatcher`] struct that monitors a config file
//! for changes using the `notify` crate. Notifications arrive on a
//! background thread owned by `notify` and are bridged to the caller
//! through a plain mpsc channel, polled from the event loop.

use crate::errors::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use tracing::{debug, error, warn};

/// Watches a config file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    rx: Receiver<()>,
    // Dropping the watcher stops the notify thread; keep it alive.
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Create a new watcher for the given config file path.
    ///
    /// The parent directory is watched (non-recursively) rather than the
    /// file itself, so atomic saves and file creation are both seen.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "config file {} does not exist yet, will watch for creation",
                path.display()
            );
        }

        let watch_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| path.clone());
        let file_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        let (tx, rx) = mpsc::channel::<()>();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }

                    // Check if the changed file matches our config file
                    let is_our_file = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false));

                    if is_our_file {
                        debug!("config file change detected");
                        let _ = tx.send(());
                    }
                }
                Err(e) => {
                    error!("file watcher error: {e}");
                }
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    /// Drain pending change notifications. Returns true if any arrived.
    pub fn take_change(&self) -> bool {
        let mut changed = false;
        loop {
            match self.rx.try_recv() {
                Ok(()) => changed = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Path of the watched config file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
