//! Core TOML config loading: read from path or platform default.

use crate::schema::WireSphereConfig;
use crate::validation;
use std::path::Path;
use tracing::{info, warn};
use wiresphere_common::ConfigError;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// If validation fails, a warning is logged and the parsed config is
/// returned as-is; callers wanting a hard failure validate again.
pub fn load_from_path(path: &Path) -> Result<WireSphereConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: WireSphereConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/wiresphere/config.toml`
/// On Linux: `~/.config/wiresphere/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<WireSphereConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(WireSphereConfig::default());
    }

    load_from_path(&path)
}
