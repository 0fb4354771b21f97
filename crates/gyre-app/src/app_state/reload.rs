//! Config live reload: debounced file watching and hot apply.

use std::time::{Duration, Instant};

use super::core::GyreApp;

/// Quiet period after the last change notification before reloading.
/// Editors often write a file several times in quick succession.
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(500);

impl GyreApp {
    /// Poll the config watcher and apply a pending reload once the
    /// debounce window has passed.
    pub(super) fn poll_reload(&mut self) {
        let changed = match self.watcher {
            Some(ref w) => w.take_change(),
            None => return,
        };

        if changed {
            self.reload_deadline = Some(Instant::now() + RELOAD_DEBOUNCE);
        }

        let Some(deadline) = self.reload_deadline else {
            return;
        };
        if Instant::now() < deadline {
            return;
        }
        self.reload_deadline = None;
        self.reload_config();
    }

    /// Re-read the config file and apply it to the running scene.
    ///
    /// A file that fails to parse or validate leaves the current
    /// settings untouched.
    fn reload_config(&mut self) {
        let Some(ref path) = self.config_path else {
            return;
        };

        let new_config = match gyre_config::load_config_from(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Config reload failed, keeping current settings: {e}");
                return;
            }
        };

        self.scene.apply_config(&new_config);
        if let Some(ref mut rs) = self.render_state {
            rs.apply_config(&new_config);
        }
        self.config = new_config;
        self.update_window_title();
        tracing::info!("Config reloaded from {}", path.display());
    }
}
