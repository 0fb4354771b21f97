use gyre_config::schema::GyreConfig;

use crate::gpu::SceneUniforms;
use crate::pointer::PointerTracker;

/// CPU-side scene state: uniforms, pointer damping, and the animation
/// clock.
///
/// Animation is frame-based: each presented frame advances time by the
/// configured `time_step`, so the shape moves at the surface's refresh
/// cadence rather than wall-clock time.
pub struct SceneRenderer {
    uniforms: SceneUniforms,
    pointer: PointerTracker,
    time_step: f32,
}

impl SceneRenderer {
    /// Create scene state from the application configuration.
    pub fn from_config(config: &GyreConfig) -> Self {
        Self {
            uniforms: SceneUniforms::from_config(config),
            pointer: PointerTracker::from_config(&config.pointer),
            time_step: config.scene.time_step as f32,
        }
    }

    /// Update the viewport dimensions after a resize.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.uniforms.update_viewport(width, height);
        self.pointer.set_viewport(width, height);
    }

    /// Feed a raw cursor position in physical pixels.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.pointer_moved(x, y);
    }

    /// Advance one frame: step the clock and damp the pointer.
    pub fn advance_frame(&mut self) {
        self.uniforms.advance_time(self.time_step);
        self.pointer.advance();
        self.pointer.write_uniforms(&mut self.uniforms);
    }

    /// The current uniform block, ready for upload.
    pub fn uniforms(&self) -> &SceneUniforms {
        &self.uniforms
    }

    /// Apply a reloaded configuration without resetting the animation.
    ///
    /// Palette, speeds, and march limits take the new values; `time`,
    /// aspect, and the damped pointer position carry over so the scene
    /// does not jump.
    pub fn apply_config(&mut self, config: &GyreConfig) {
        let time = self.uniforms.time;
        let aspect = self.uniforms.aspect;
        let (px, py) = (self.uniforms.pointer_x, self.uniforms.pointer_y);

        self.uniforms = SceneUniforms::from_config(config);
        self.uniforms.time = time;
        self.uniforms.aspect = aspect;
        self.uniforms.set_pointer(px, py);

        self.pointer.apply_config(&config.pointer);
        self.time_step = config.scene.time_step as f32;
    }
}

// =============================================================================
// Tests
// =============================================================================
