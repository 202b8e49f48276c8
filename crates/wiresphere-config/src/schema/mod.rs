//! Configuration schema types for wiresphere.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod colors;
mod flat;
mod mesh;
mod projected;
mod sphere;
mod system;
mod window;

pub use colors::*;
pub use flat::*;
pub use mesh::*;
pub use projected::*;
pub use sphere::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only the section of the selected `sphere.variant` affects rendering;
/// the other variant sections are still validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WireSphereConfig {
    pub window: WindowConfig,
    pub sphere: SphereConfig,
    pub flat: FlatConfig,
    pub projected: ProjectedConfig,
    pub mesh: MeshConfig,
    pub colors: ColorConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_projected_variant() {
        let config = WireSphereConfig::default();
        assert_eq!(config.sphere.variant, SphereVariant::Projected);
        assert_eq!(config.sphere.slice_count, 8);
    }

    #[test]
    fn default_config_timings() {
        let config = WireSphereConfig::default();
        assert_eq!(config.flat.cycle_ms, 6000);
        assert_eq!(config.projected.cycle_ms, 5000);
        assert_eq!(config.mesh.cycle_ms, 6000);
        assert_eq!(config.flat.rotation_period_ms, 8000);
        assert_eq!(config.projected.tilt_period_ms, 4000);
    }

    #[test]
    fn default_config_has_segment_counts() {
        let config = WireSphereConfig::default();
        assert_eq!(config.flat.segments, 32);
        assert_eq!(config.projected.segments, 16);
    }

    #[test]
    fn default_mesh_window() {
        let config = WireSphereConfig::default();
        assert!((config.mesh.slice_window_start - 0.2).abs() < f64::EPSILON);
        assert!((config.mesh.slice_window_end - 0.7).abs() < f64::EPSILON);
        assert!((config.mesh.wireframe_peak - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: WireSphereConfig = toml::from_str(
            r#"
[sphere]
variant = "mesh"
"#,
        )
        .unwrap();
        assert_eq!(config.sphere.variant, SphereVariant::Mesh);
        assert_eq!(config.sphere.slice_count, 8);
        assert_eq!(config.window.width, 390);
        assert_eq!(config.colors.wireframe, "#0096ff");
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let result: Result<WireSphereConfig, _> = toml::from_str(
            r#"
[sphere]
variant = "voxel"
"#,
        );
        assert!(result.is_err());
    }
}
