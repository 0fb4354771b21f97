//! March and pointer config validation.

use crate::schema::GyreConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate ray-march budget constraints.
pub(crate) fn validate_march(errors: &mut Vec<String>, config: &GyreConfig) {
    validate_range(errors, "march.max_steps", config.march.max_steps, 16, 1024);
    validate_range_f64(
        errors,
        "march.max_distance",
        config.march.max_distance,
        1.0,
        100.0,
    );
    validate_range_f64(
        errors,
        "march.surface_epsilon",
        config.march.surface_epsilon,
        0.000001,
        0.01,
    );
}

/// Validate pointer reaction constraints.
pub(crate) fn validate_pointer(errors: &mut Vec<String>, config: &GyreConfig) {
    validate_range_f64(errors, "pointer.damping", config.pointer.damping, 0.001, 1.0);
    validate_range_f64(
        errors,
        "pointer.influence",
        config.pointer.influence,
        0.0,
        1.0,
    );
}
