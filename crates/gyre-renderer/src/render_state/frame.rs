use crate::gpu::{RendererError, SceneUniforms};

use super::helpers::log_first_frame;
use super::state::RenderState;

impl RenderState {
    /// Render a complete frame: upload uniforms, ray-march pass, present.
    pub fn render_scene(&mut self, uniforms: &SceneUniforms) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("gyre frame encoder"),
            });

        self.scene.update_uniforms(&self.gpu.queue, uniforms);
        self.scene.render(&mut encoder, &view, self.clear_color);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
