//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod colors;
mod helpers;
mod variants;
mod window;

#[cfg(test)]
mod tests;

use crate::schema::WireSphereConfig;
use wiresphere_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WireSphereConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    variants::validate_sphere(&mut errors, config);
    variants::validate_flat(&mut errors, config);
    variants::validate_projected(&mut errors, config);
    variants::validate_mesh(&mut errors, config);
    colors::validate_colors(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
