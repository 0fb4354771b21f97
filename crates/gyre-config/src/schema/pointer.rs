//! Pointer reaction configuration types.

use serde::{Deserialize, Serialize};

/// How the scene reacts to cursor movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// React to cursor movement at all.
    pub enabled: bool,
    /// Per-frame easing factor toward the cursor (valid range: 0.001-1.0).
    ///
    /// 1.0 snaps instantly; smaller values trail the cursor.
    pub damping: f64,
    /// How strongly the view tilts toward the cursor (valid range: 0.0-1.0).
    pub influence: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            damping: 0.05,
            influence: 0.07,
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
    fn pointer_config_defaults() {
        let config = PointerConfig::default();
        assert!(config.enabled);
        assert!((config.damping - 0.05).abs() < f64::EPSILON);
        assert!((config.influence - 0.07).abs() < f64::EPSILON);
    }

    #[test]
    fn pointer_config_partial_toml() {
        let toml_str = r#"
enabled = false
"#;
        let config: PointerConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.enabled);
        // Defaults preserved
        assert!((config.damping - 0.05).abs() < f64::EPSILON);
        assert!((config.influence - 0.07).abs() < f64::EPSILON);
    }
}
