//! 3D scene backend: wireframe line lists and alpha-blended faces, one
//! uniform block per mesh.

mod renderer;
mod resources;
mod types;

pub use renderer::*;
pub use resources::{GpuGeometry, GpuMaterial, GpuResource, ResourceTable};
pub use types::{mesh_uniforms, MeshUniforms, MeshVertex};

#[cfg(test)]
mod tests;
