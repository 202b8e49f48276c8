//! Meshes, materials and transforms.

use wiresphere_common::Color;

use crate::backend::ResourceId;

/// Translation, XYZ Euler rotation (radians) and per-axis scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: [0.0; 3],
        rotation: [0.0; 3],
        scale: [1.0; 3],
    };

    pub fn set_uniform_scale(&mut self, s: f32) {
        self.scale = [s; 3];
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Unlit material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub opacity: f32,
    /// Draw triangle edges instead of faces.
    pub wireframe: bool,
    /// Render back faces too.
    pub double_sided: bool,
}

impl Material {
    pub fn wireframe(color: Color, opacity: f32) -> Self {
        Self {
            color,
            opacity,
            wireframe: true,
            double_sided: false,
        }
    }

    pub fn double_sided(color: Color, opacity: f32) -> Self {
        Self {
            color,
            opacity,
            wireframe: false,
            double_sided: true,
        }
    }
}

/// Index of a mesh inside its [`Scene`](super::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub(crate) usize);

/// A geometry + material pair placed in the scene group.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub geometry: ResourceId,
    pub material_id: ResourceId,
    pub material: Material,
    pub transform: Transform,
}
