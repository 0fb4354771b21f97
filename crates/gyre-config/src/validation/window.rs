//! Window config validation.

use crate::schema::GyreConfig;

use super::helpers::validate_range;

/// Validate window size constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &GyreConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 8192);
    validate_range(errors, "window.height", config.window.height, 320, 8192);
}
