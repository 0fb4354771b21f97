//! File watcher for live config reload.
//!
//! Uses the `notify` crate to watch the config file for changes.
//! Events are drained from the render loop; debouncing happens there,
//! so rapid editor saves (write + rename) coalesce into one reload.

mod config_watcher;

#[cfg(test)]
mod tests;

pub use config_watcher::ConfigWatcher;
