//! Mesh (perspective scene) variant settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Slice phase cycle in ms (at least 5000).
    pub cycle_ms: u32,
    /// Phase at which slice planes start to show (0.0-1.0, below `slice_window_end`).
    pub slice_window_start: f64,
    /// Phase at which slice planes start to fade.
    pub slice_window_end: f64,
    /// Outer sphere opacity outside the slice window.
    pub wireframe_peak: f64,
    /// Outer sphere opacity inside the slice window.
    pub wireframe_dim: f64,
    /// Per-frame opacity step used when fading back.
    pub fade_step: f64,
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            cycle_ms: 6000,
            slice_window_start: 0.2,
            slice_window_end: 0.7,
            wireframe_peak: 0.8,
            wireframe_dim: 0.3,
            fade_step: 0.02,
            fov_degrees: 75.0,
        }
    }
}
