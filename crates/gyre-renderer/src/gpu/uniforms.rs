//! GPU uniform buffer types for the gyroid scene pass.
//!
//! `SceneUniforms` is the single uniform block uploaded each frame.
//! The ray-march fragment shader reads every field from it.

use gyre_config::schema::GyreConfig;

use super::super::scene::srgb_to_linear;
use gyre_config::colors::parse_hex_color;

/// GPU-side uniform buffer matching the WGSL `Uniforms` struct.
///
/// Layout: 24 × f32 = 96 bytes, 16-byte aligned (wgpu requirement).
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    /// Elapsed animation time (wraps at ~6 hours to avoid precision loss).
    pub time: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Damped pointer X in half-NDC (-0.5..0.5).
    pub pointer_x: f32,
    /// Damped pointer Y in half-NDC (-0.5..0.5).
    pub pointer_y: f32,

    /// Camera tilt per unit of pointer offset (radians).
    pub pointer_influence: f32,
    /// Shape rotation speed multiplier.
    pub spin_speed: f32,
    /// Gyroid density pulse speed multiplier.
    pub pulse_speed: f32,
    /// Fresnel rim glow multiplier.
    pub rim_strength: f32,

    /// Background vignette falloff radius.
    pub vignette_radius: f32,
    /// Ray march step limit.
    pub max_steps: f32,
    /// Ray march bail-out distance.
    pub max_distance: f32,
    /// Surface hit threshold.
    pub surface_epsilon: f32,

    /// Background color — red channel (linear).
    pub background_r: f32,
    /// Background color — green channel (linear).
    pub background_g: f32,
    /// Background color — blue channel (linear).
    pub background_b: f32,
    /// Core color — red channel (linear).
    pub core_r: f32,

    /// Core color — green channel (linear).
    pub core_g: f32,
    /// Core color — blue channel (linear).
    pub core_b: f32,
    /// Shell color — red channel (linear).
    pub shell_r: f32,
    /// Shell color — green channel (linear).
    pub shell_g: f32,

    /// Shell color — blue channel (linear).
    pub shell_b: f32,
    /// Rim color — red channel (linear).
    pub rim_r: f32,
    /// Rim color — green channel (linear).
    pub rim_g: f32,
    /// Rim color — blue channel (linear).
    pub rim_b: f32,
}

/// Parse a palette entry into linear RGB, keeping the fallback when the
/// hex string is invalid.
fn linear_rgb(hex: &str, fallback: [f32; 3]) -> [f32; 3] {
    parse_hex_color(hex)
        .map(|[r, g, b]| [r as f32, g as f32, b as f32])
        .unwrap_or(fallback)
        .map(srgb_to_linear)
}

impl SceneUniforms {
    /// Create uniforms from application config with default runtime values.
    ///
    /// Runtime-varying fields (`time`, `aspect`, `pointer_x`, `pointer_y`)
    /// start at rest and are updated each frame.
    pub fn from_config(config: &GyreConfig) -> Self {
        let [background_r, background_g, background_b] =
            linear_rgb(&config.scene.background_color, [0.07, 0.2, 0.35]);
        let [core_r, core_g, core_b] = linear_rgb(&config.scene.core_color, [1.0, 0.5, 0.0]);
        let [shell_r, shell_g, shell_b] = linear_rgb(&config.scene.shell_color, [0.0, 0.0, 0.05]);
        let [rim_r, rim_g, rim_b] = linear_rgb(&config.scene.rim_color, [0.0, 0.48, 0.8]);

        let pointer_influence = if config.pointer.enabled {
            config.pointer.influence as f32
        } else {
            0.0
        };

        Self {
            time: 0.0,
            aspect: 1.0,
            pointer_x: 0.0,
            pointer_y: 0.0,
            pointer_influence,
            spin_speed: config.scene.spin_speed as f32,
            pulse_speed: config.scene.pulse_speed as f32,
            rim_strength: config.scene.rim_strength as f32,
            vignette_radius: config.scene.vignette_radius as f32,
            max_steps: config.march.max_steps as f32,
            max_distance: config.march.max_distance as f32,
            surface_epsilon: config.march.surface_epsilon as f32,
            background_r,
            background_g,
            background_b,
            core_r,
            core_g,
            core_b,
            shell_r,
            shell_g,
            shell_b,
            rim_r,
            rim_g,
            rim_b,
        }
    }

    /// Advance animation time. Wraps at ~6 hours to avoid f32 precision loss.
    pub fn advance_time(&mut self, dt: f32) {
        self.time = (self.time + dt) % 21600.0;
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn update_viewport(&mut self, width: u32, height: u32) {
        self.aspect = if height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
    }

    /// Write the damped pointer position (half-NDC coordinates).
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer_x = x;
        self.pointer_y = y;
    }
}

// =============================================================================
// Tests
// =============================================================================
