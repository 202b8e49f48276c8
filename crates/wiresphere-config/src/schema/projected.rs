//! Projected (rotated 3D edges) variant settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectedConfig {
    /// Meridian/parallel subdivisions (valid range: 3-256).
    pub segments: u32,
    /// Slice cycle length in ms (at least 5000).
    pub cycle_ms: u32,
    /// Wireframe opacity while slices are visible (valid range: 0.0-1.0).
    pub wireframe_dim: f64,
    /// One full Y turn in ms.
    pub rotation_period_ms: u32,
    /// One tilt sweep (0 to `max_tilt`) in ms; the tilt ping-pongs.
    pub tilt_period_ms: u32,
    /// Maximum X tilt in radians.
    pub max_tilt: f64,
}

impl Default for ProjectedConfig {
    fn default() -> Self {
        Self {
            segments: 16,
            cycle_ms: 5000,
            wireframe_dim: 0.3,
            rotation_period_ms: 8000,
            tilt_period_ms: 4000,
            max_tilt: std::f64::consts::PI * 0.2,
        }
    }
}
