//! Color palette.

use serde::{Deserialize, Serialize};

/// Hex color strings (`#rrggbb` or `#rrggbbaa`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: String,
    pub wireframe: String,
    pub slice: String,
    pub core: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#000000".into(),
            wireframe: "#0096ff".into(),
            slice: "#ff6b35".into(),
            core: "#00ff88".into(),
        }
    }
}
