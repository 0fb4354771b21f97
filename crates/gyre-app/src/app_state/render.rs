//! Frame rendering logic.

use super::core::GyreApp;

impl GyreApp {
    /// Render a single frame: advance the scene and submit the pass.
    pub(super) fn render_frame(&mut self) {
        self.timer.begin_frame();
        self.scene.advance_frame();

        if let Some(ref mut rs) = self.render_state {
            if let Err(e) = rs.render_scene(self.scene.uniforms()) {
                tracing::error!("Render error: {e}");
            }
        }

        self.refresh_title();
    }
}
