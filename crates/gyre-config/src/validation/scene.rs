//! Scene config validation: colors, strengths, speeds.

use crate::schema::GyreConfig;

use super::helpers::{validate_hex_color, validate_range_f64};

/// Validate all scene-related constraints.
pub(crate) fn validate_scene(errors: &mut Vec<String>, config: &GyreConfig) {
    let scene = &config.scene;

    validate_hex_color(errors, "scene.background_color", &scene.background_color);
    validate_hex_color(errors, "scene.core_color", &scene.core_color);
    validate_hex_color(errors, "scene.shell_color", &scene.shell_color);
    validate_hex_color(errors, "scene.rim_color", &scene.rim_color);

    validate_range_f64(errors, "scene.rim_strength", scene.rim_strength, 0.0, 5.0);
    validate_range_f64(
        errors,
        "scene.vignette_radius",
        scene.vignette_radius,
        0.1,
        2.0,
    );
    validate_range_f64(errors, "scene.spin_speed", scene.spin_speed, 0.0, 5.0);
    validate_range_f64(errors, "scene.pulse_speed", scene.pulse_speed, 0.0, 5.0);
    validate_range_f64(errors, "scene.time_step", scene.time_step, 0.0001, 0.1);
}
