//! Gyre configuration system.
//!
//! Provides TOML-based configuration with live reload and full
//! validation. All config sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gyre_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod colors;
pub mod errors;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

// Re-export core types for convenience
pub use errors::ConfigError;
pub use schema::{GyreConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use std::path::Path;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<GyreConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path.
///
/// Unlike [`load_config`], a missing file is an error here: a path the
/// user named on the command line should exist.
pub fn load_config_from(path: &Path) -> Result<GyreConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GyreConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = GyreConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"scene\""));
        assert!(json.contains("\"march\""));
        assert!(json.contains("\"pointer\""));
    }

    #[test]
    fn config_to_json_contains_default_palette() {
        let config = GyreConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"#123359\""));
        assert!(json.contains("\"#ff8000\""));
        assert!(json.contains("\"#00000d\""));
        assert!(json.contains("\"#007acc\""));
    }

    #[test]
    fn config_json_round_trips() {
        let config = GyreConfig::default();
        let json = config_to_json(&config);
        let back: GyreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.window.title, config.window.title);
        assert_eq!(back.scene.background_color, config.scene.background_color);
        assert_eq!(back.march.max_steps, config.march.max_steps);
        assert!((back.pointer.damping - config.pointer.damping).abs() < 1e-12);
    }

    #[test]
    fn load_config_from_missing_path_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_invalid_values_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[scene]
spin_speed = 50.0
"#,
        )
        .unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("scene.spin_speed"));
    }

    #[test]
    fn load_config_from_valid_file_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r##"
[scene]
rim_color = "#ffffff"
"##,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.scene.rim_color, "#ffffff");
    }
}
