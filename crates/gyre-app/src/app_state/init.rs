//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use gyre_config::ConfigWatcher;
use gyre_renderer::RenderState;

use super::core::GyreApp;

impl GyreApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        match pollster::block_on(RenderState::new(window.clone(), &self.config)) {
            Ok(rs) => {
                self.scene
                    .set_viewport(rs.gpu.size.width, rs.gpu.size.height);
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.start_watcher();

        self.window = Some(window);
        tracing::info!("Window created and renderer initialized");
        true
    }

    /// Watch the config file for live reload. On failure the app runs
    /// without reload.
    fn start_watcher(&mut self) {
        let Some(ref path) = self.config_path else {
            return;
        };
        match ConfigWatcher::new(path.clone()) {
            Ok(w) => {
                tracing::info!("Watching {} for changes", w.path().display());
                self.watcher = Some(w);
            }
            Err(e) => {
                tracing::warn!("Config watcher disabled: {e}");
            }
        }
    }
}
