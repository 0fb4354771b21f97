//! Configuration schema types for gyre.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the built-in scene.

mod march;
mod pointer;
mod scene;
mod window;

pub use march::*;
pub use pointer::*;
pub use scene::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for gyre.
///
/// All options have sensible defaults matching the built-in scene.
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GyreConfig {
    pub window: WindowConfig,
    pub scene: SceneConfig,
    pub march: MarchConfig,
    pub pointer: PointerConfig,
}

// =============================================================================
// Tests
// =============================================================================
