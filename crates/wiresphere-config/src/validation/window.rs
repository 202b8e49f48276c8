//! Window size validation.

use crate::schema::WireSphereConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &WireSphereConfig) {
    validate_range(errors, "window.width", config.window.width, 1, 8192);
    validate_range(errors, "window.height", config.window.height, 1, 8192);
}
