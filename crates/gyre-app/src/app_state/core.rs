//! GyreApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use gyre_config::schema::GyreConfig;
use gyre_config::ConfigWatcher;
use gyre_renderer::{FrameTimer, RenderState, SceneRenderer};

/// Top-level application state.
pub struct GyreApp {
    pub(super) config: GyreConfig,
    pub(super) config_path: Option<PathBuf>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Scene animation
    pub(super) scene: SceneRenderer,
    pub(super) timer: FrameTimer,

    // Config live reload
    pub(super) watcher: Option<ConfigWatcher>,
    pub(super) reload_deadline: Option<Instant>,

    // FPS title readout rate limit
    pub(super) last_title_refresh: Instant,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl GyreApp {
    pub fn new(config: GyreConfig, config_override: Option<PathBuf>) -> Self {
        let config_path = match config_override {
            Some(p) => Some(p),
            None => match gyre_config::toml_loader::default_config_path() {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!("Cannot resolve config path, live reload disabled: {e}");
                    None
                }
            },
        };
        let scene = SceneRenderer::from_config(&config);

        Self {
            config,
            config_path,
            window: None,
            render_state: None,
            scene,
            timer: FrameTimer::new(),
            watcher: None,
            reload_deadline: None,
            last_title_refresh: Instant::now(),
            should_exit: false,
        }
    }
}
