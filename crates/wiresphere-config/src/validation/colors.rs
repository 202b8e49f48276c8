//! Hex color format validation.

use crate::schema::WireSphereConfig;
use wiresphere_common::Color;

pub(crate) fn validate_colors(errors: &mut Vec<String>, config: &WireSphereConfig) {
    let colors = &config.colors;
    for (name, value) in [
        ("colors.background", &colors.background),
        ("colors.wireframe", &colors.wireframe),
        ("colors.slice", &colors.slice),
        ("colors.core", &colors.core),
    ] {
        if Color::from_hex(value).is_none() {
            errors.push(format!("{name} = \"{value}\" is not a hex color"));
        }
    }
}
