//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial window size and title.
///
/// The default size matches a portrait phone viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Logical width in pixels (valid range: 1-8192).
    pub width: u32,
    /// Logical height in pixels (valid range: 1-8192).
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 390,
            height: 844,
            title: "wiresphere".into(),
        }
    }
}
