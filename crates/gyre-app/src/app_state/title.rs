//! Window title management: optional FPS readout.

use std::time::{Duration, Instant};

use super::core::GyreApp;

/// Minimum interval between FPS title updates.
const TITLE_REFRESH: Duration = Duration::from_millis(500);

impl GyreApp {
    /// Set the window title from config.
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&self.config.window.title);
    }

    /// Refresh the FPS readout in the title, rate-limited to twice a
    /// second so the title bar does not flicker.
    pub(super) fn refresh_title(&mut self) {
        if !self.config.window.show_fps {
            return;
        }
        let now = Instant::now();
        if now.duration_since(self.last_title_refresh) < TITLE_REFRESH {
            return;
        }
        self.last_title_refresh = now;

        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&format!(
            "{} — {:.0} fps ({:.1} ms)",
            self.config.window.title,
            self.timer.fps(),
            self.timer.frame_time_ms(),
        ));
    }
}

// =============================================================================
// TESTS
// =============================================================================
