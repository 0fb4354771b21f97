//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window size and title settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Logical window width in pixels (valid range: 320-8192).
    pub width: u32,
    /// Logical window height in pixels (valid range: 320-8192).
    pub height: u32,
    /// Append a live FPS readout to the window title.
    pub show_fps: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Gyre".into(),
            width: 1280,
            height: 800,
            show_fps: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Gyre");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
        assert!(!config.show_fps);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "Spinning Thing"
show_fps = true
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "Spinning Thing");
        assert!(config.show_fps);
        // Defaults preserved
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
    }
}
