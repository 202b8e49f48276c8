//! Variant selection.

use serde::{Deserialize, Serialize};

/// Which rendition of the sphere to mount.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SphereVariant {
    /// Flat circle approximation with container rotation.
    Flat,
    /// 3D edges rotated and orthographically projected.
    #[default]
    Projected,
    /// Perspective scene of wireframe meshes and slice planes.
    Mesh,
}

impl SphereVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SphereVariant::Flat => "flat",
            SphereVariant::Projected => "projected",
            SphereVariant::Mesh => "mesh",
        }
    }
}

impl std::str::FromStr for SphereVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flat" => Ok(SphereVariant::Flat),
            "projected" => Ok(SphereVariant::Projected),
            "mesh" => Ok(SphereVariant::Mesh),
            other => Err(format!(
                "unknown variant '{other}' (expected flat, projected or mesh)"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub variant: SphereVariant,
    /// Number of radial slice primitives (valid range: 1-64).
    pub slice_count: u32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            variant: SphereVariant::Projected,
            slice_count: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_from_str_is_case_insensitive() {
        assert_eq!("Flat".parse::<SphereVariant>(), Ok(SphereVariant::Flat));
        assert_eq!("MESH".parse::<SphereVariant>(), Ok(SphereVariant::Mesh));
        assert!("cube".parse::<SphereVariant>().is_err());
    }

    #[test]
    fn variant_as_str_round_trips() {
        for v in [SphereVariant::Flat, SphereVariant::Projected, SphereVariant::Mesh] {
            assert_eq!(v.as_str().parse::<SphereVariant>(), Ok(v));
        }
    }
}
