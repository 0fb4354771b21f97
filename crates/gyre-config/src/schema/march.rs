//! Ray-march quality configuration types.

use serde::{Deserialize, Serialize};

/// Ray-marching budget. Step count costs GPU time roughly linearly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarchConfig {
    /// Maximum sphere-tracing steps per ray (valid range: 16-1024).
    pub max_steps: u32,
    /// Traveled distance at which a ray counts as a miss (valid range: 1.0-100.0).
    pub max_distance: f64,
    /// Distance-field threshold for a surface hit (valid range: 0.000001-0.01).
    pub surface_epsilon: f64,
}

impl Default for MarchConfig {
    fn default() -> Self {
        Self {
            max_steps: 256,
            max_distance: 5.0,
            surface_epsilon: 0.0001,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
