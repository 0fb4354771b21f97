//! Tests for the full validation pipeline.

use super::*;
use crate::schema::GyreConfig;

#[test]
fn default_config_validates() {
    let config = GyreConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_window_width_too_small() {
    let mut config = GyreConfig::default();
    config.window.width = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
}

#[test]
fn catches_window_height_too_large() {
    let mut config = GyreConfig::default();
    config.window.height = 20000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.height"));
}

#[test]
fn catches_bad_background_color() {
    let mut config = GyreConfig::default();
    config.scene.background_color = "nightfall".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.background_color"));
    assert!(err.contains("#rrggbb"));
}

#[test]
fn catches_shorthand_hex_color() {
    let mut config = GyreConfig::default();
    config.scene.rim_color = "#07a".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.rim_color"));
}

#[test]
fn catches_bad_shell_color() {
    let mut config = GyreConfig::default();
    config.scene.shell_color = "rgb(0,0,13)".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.shell_color"));
    assert!(err.contains("#rrggbb"));
}

#[test]
fn catches_rim_strength_out_of_range() {
    let mut config = GyreConfig::default();
    config.scene.rim_strength = 7.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.rim_strength"));
}

#[test]
fn catches_vignette_radius_zero() {
    let mut config = GyreConfig::default();
    config.scene.vignette_radius = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.vignette_radius"));
}

#[test]
fn catches_negative_spin_speed() {
    let mut config = GyreConfig::default();
    config.scene.spin_speed = -0.3;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.spin_speed"));
}

#[test]
fn catches_pulse_speed_out_of_range() {
    let mut config = GyreConfig::default();
    config.scene.pulse_speed = 9.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.pulse_speed"));
}

#[test]
fn catches_time_step_too_large() {
    let mut config = GyreConfig::default();
    config.scene.time_step = 0.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.time_step"));
}

#[test]
fn catches_max_steps_too_low() {
    let mut config = GyreConfig::default();
    config.march.max_steps = 4;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("march.max_steps"));
}

#[test]
fn catches_max_steps_too_high() {
    let mut config = GyreConfig::default();
    config.march.max_steps = 4096;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("march.max_steps"));
}

#[test]
fn catches_max_distance_out_of_range() {
    let mut config = GyreConfig::default();
    config.march.max_distance = 500.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("march.max_distance"));
}

#[test]
fn catches_surface_epsilon_zero() {
    let mut config = GyreConfig::default();
    config.march.surface_epsilon = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("march.surface_epsilon"));
}

#[test]
fn catches_pointer_damping_zero() {
    let mut config = GyreConfig::default();
    config.pointer.damping = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("pointer.damping"));
}

#[test]
fn catches_pointer_influence_over_one() {
    let mut config = GyreConfig::default();
    config.pointer.influence = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("pointer.influence"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = GyreConfig::default();
    config.window.width = 10;
    config.scene.core_color = "orange".into();
    config.march.max_steps = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
    assert!(err.contains("scene.core_color"));
    assert!(err.contains("march.max_steps"));
    // Errors are joined with "; "
    assert!(err.contains("; "));
}

#[test]
fn range_error_message_format() {
    let mut config = GyreConfig::default();
    config.march.max_steps = 8;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("march.max_steps = 8 is out of range [16, 1024]"));
}
