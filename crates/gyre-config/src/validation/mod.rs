//! Full configuration validation.
//!
//! Validates all numeric ranges and color formats. Each domain has its
//! own submodule; this orchestrator calls them all and collects errors
//! into a single `ConfigError`.

mod helpers;
mod misc;
mod scene;
mod window;

#[cfg(test)]
mod tests;

use crate::errors::ConfigError;
use crate::schema::GyreConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GyreConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    scene::validate_scene(&mut errors, config);
    misc::validate_march(&mut errors, config);
    misc::validate_pointer(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
