use std::sync::Arc;
use winit::window::Window;

use gyre_config::schema::GyreConfig;

use crate::gpu::{GpuContext, RendererError};
use crate::scene::ScenePipeline;

use super::helpers::background_clear_color;

/// Core rendering state holding the GPU context and the scene pipeline.
///
/// The scene is a single full-screen ray-march pass, so there is no
/// other pipeline to composite with. The clear color matches the
/// configured background so resize edges blend in.
pub struct RenderState {
    pub gpu: GpuContext,
    pub scene: ScenePipeline,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, config: &GyreConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let scene = ScenePipeline::new(&gpu.device, gpu.format());

        Ok(Self {
            gpu,
            scene,
            clear_color: background_clear_color(config),
        })
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Refresh config-derived render state after a live reload.
    pub fn apply_config(&mut self, config: &GyreConfig) {
        self.clear_color = background_clear_color(config);
    }
}
