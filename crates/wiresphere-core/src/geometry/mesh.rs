//! Indexed triangle meshes for the scene variant.
//!
//! Generates the UV sphere and plane primitives the mesh variant puts in
//! its scene group. Vertices are shared through an index buffer; the
//! wireframe view of a mesh is derived from its triangle edges.

use std::collections::HashSet;
use std::f32::consts::{PI, TAU};

/// Indexed triangle mesh in object space.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGeometry {
    pub positions: Vec<[f32; 3]>,
    pub triangles: Vec<[u32; 3]>,
}

impl MeshGeometry {
    /// UV sphere centered at the origin, north pole at +Y.
    ///
    /// `width_segments` runs around the equator, `height_segments` from
    /// pole to pole. The pole rows produce a single triangle per quad, so
    /// the triangle count is `width * (2 * height - 2)`.
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let w = width_segments.max(3);
        let h = height_segments.max(2);

        let mut positions = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
        for iy in 0..=h {
            let v = iy as f32 / h as f32;
            let theta = v * PI;
            for ix in 0..=w {
                let u = ix as f32 / w as f32;
                let phi = u * TAU;
                positions.push([
                    -radius * phi.cos() * theta.sin(),
                    radius * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                ]);
            }
        }

        let row = w + 1;
        let mut triangles = Vec::with_capacity((w * (2 * h - 2)) as usize);
        for iy in 0..h {
            for ix in 0..w {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;
                if iy != 0 {
                    triangles.push([a, b, d]);
                }
                if iy != h - 1 {
                    triangles.push([b, c, d]);
                }
            }
        }

        Self {
            positions,
            triangles,
        }
    }

    /// Single-quad plane in the XY plane facing +Z.
    pub fn plane(width: f32, height: f32) -> Self {
        let hw = width * 0.5;
        let hh = height * 0.5;
        Self {
            positions: vec![
                [-hw, hh, 0.0],
                [hw, hh, 0.0],
                [-hw, -hh, 0.0],
                [hw, -hh, 0.0],
            ],
            triangles: vec![[0, 2, 1], [2, 3, 1]],
        }
    }

    /// Unique triangle edges as index pairs, in first-seen order.
    pub fn edge_indices(&self) -> Vec<[u32; 2]> {
        let mut seen = HashSet::with_capacity(self.triangles.len() * 3);
        let mut edges = Vec::with_capacity(self.triangles.len() * 3 / 2 + 1);
        for tri in &self.triangles {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    edges.push([a, b]);
                }
            }
        }
        edges
    }
}

// =============================================================================
// Tests
// =============================================================================
