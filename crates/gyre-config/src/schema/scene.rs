//! Scene palette and animation configuration types.

use serde::{Deserialize, Serialize};

/// Colors and animation speeds for the gyroid sphere.
///
/// All colors are `#rrggbb` hex strings. Speeds are multipliers on the
/// animation clock; `time_step` is how far that clock advances per
/// rendered frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Background color behind the sphere.
    pub background_color: String,
    /// Surface color at the sphere's center.
    pub core_color: String,
    /// Surface color toward the outer shell.
    pub shell_color: String,
    /// Rim highlight color (fresnel edge light).
    pub rim_color: String,
    /// Rim highlight strength (valid range: 0.0-5.0).
    pub rim_strength: f64,
    /// Vignette falloff radius in centered-UV units (valid range: 0.1-2.0).
    pub vignette_radius: f64,
    /// Rotation speed of the gyroid shell (valid range: 0.0-5.0).
    pub spin_speed: f64,
    /// Speed of the open/close pulse (valid range: 0.0-5.0).
    pub pulse_speed: f64,
    /// Animation time advanced per rendered frame (valid range: 0.0001-0.1).
    pub time_step: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background_color: "#123359".into(),
            core_color: "#ff8000".into(),
            shell_color: "#00000d".into(),
            rim_color: "#007acc".into(),
            rim_strength: 0.8,
            vignette_radius: 0.7,
            spin_speed: 0.3,
            pulse_speed: 0.5,
            time_step: 0.005,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
