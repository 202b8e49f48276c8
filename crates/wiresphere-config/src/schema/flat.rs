//! Flat (2D circle approximation) variant settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatConfig {
    /// Outer ring subdivisions (valid range: 3-256).
    pub segments: u32,
    /// Slice cycle length in ms (at least 5000, the slice sequence length).
    pub cycle_ms: u32,
    /// Wireframe opacity while slices are visible (valid range: 0.0-1.0).
    pub wireframe_dim: f64,
    /// Entrance delay between consecutive lines in ms.
    pub stagger_ms: u32,
    /// One full container turn in ms.
    pub rotation_period_ms: u32,
    /// Duration of each pulse half (grow, then shrink) in ms.
    pub pulse_period_ms: u32,
}

impl Default for FlatConfig {
    fn default() -> Self {
        Self {
            segments: 32,
            cycle_ms: 6000,
            wireframe_dim: 0.2,
            stagger_ms: 50,
            rotation_period_ms: 8000,
            pulse_period_ms: 2000,
        }
    }
}
