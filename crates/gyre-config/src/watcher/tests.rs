//! Tests for the config file watcher.

use super::*;

#[test]
fn watcher_new_with_nonexistent_file_succeeds() {
    // Watcher should be created even if the file doesn't exist yet,
    // as long as the parent directory does
    let dir = tempfile::tempdir().unwrap();
    let watcher = ConfigWatcher::new(dir.path().join("config.toml"));
    assert!(watcher.is_ok());
}

#[test]
fn watcher_new_with_existing_file_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# test").unwrap();

    let watcher = ConfigWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());
}

#[test]
fn take_change_is_initially_false() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# test").unwrap();

    let watcher = ConfigWatcher::new(path).unwrap();
    assert!(!watcher.take_change());
}
