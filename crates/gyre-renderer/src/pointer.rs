//! Cursor tracking with per-frame damping.
//!
//! Raw cursor positions arrive in physical pixels. The tracker maps
//! them to half-NDC coordinates (-0.5..0.5, y up) and eases the
//! reported position toward the latest target a little each frame, so
//! the camera drifts after the cursor instead of snapping.

use gyre_config::schema::PointerConfig;

use crate::gpu::SceneUniforms;

/// Damped pointer position in half-NDC coordinates.
pub struct PointerTracker {
    enabled: bool,
    damping: f32,
    width: f32,
    height: f32,
    target_x: f32,
    target_y: f32,
    current_x: f32,
    current_y: f32,
}

impl PointerTracker {
    /// Create a tracker from the pointer configuration, at rest in the
    /// center.
    pub fn from_config(config: &PointerConfig) -> Self {
        Self {
            enabled: config.enabled,
            damping: config.damping as f32,
            width: 0.0,
            height: 0.0,
            target_x: 0.0,
            target_y: 0.0,
            current_x: 0.0,
            current_y: 0.0,
        }
    }

    /// Update the viewport dimensions used for pixel → NDC mapping.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
    }

    /// Record a cursor position in physical pixels.
    ///
    /// Ignored while disabled or before the first viewport update.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if !self.enabled || self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        // Pixels → NDC (-1..1, y up), then halved
        let nx = 2.0 * (x as f32) / self.width - 1.0;
        let ny = 1.0 - 2.0 * (y as f32) / self.height;
        self.target_x = nx * 0.5;
        self.target_y = ny * 0.5;
    }

    /// Ease the damped position toward the target by one frame.
    pub fn advance(&mut self) {
        self.current_x += (self.target_x - self.current_x) * self.damping;
        self.current_y += (self.target_y - self.current_y) * self.damping;
    }

    /// Damped X position.
    pub fn x(&self) -> f32 {
        self.current_x
    }

    /// Damped Y position.
    pub fn y(&self) -> f32 {
        self.current_y
    }

    /// Publish the damped position into the uniform block.
    pub fn write_uniforms(&self, uniforms: &mut SceneUniforms) {
        uniforms.pointer_x = self.current_x;
        uniforms.pointer_y = self.current_y;
    }

    /// Apply a reloaded pointer configuration.
    ///
    /// The damped position carries over. Disabling retargets the
    /// center so the view eases back instead of freezing off-axis.
    pub fn apply_config(&mut self, config: &PointerConfig) {
        self.enabled = config.enabled;
        self.damping = config.damping as f32;
        if !self.enabled {
            self.target_x = 0.0;
            self.target_y = 0.0;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
