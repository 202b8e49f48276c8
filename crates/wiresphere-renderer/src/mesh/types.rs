use wiresphere_core::{Mesh, SceneFrame};

use crate::matrix::{self, Mat4};

/// Object-space position; meshes are unlit so nothing else is needed.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
}

impl MeshVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    };
}

/// Per-mesh uniform block: MVP (64 bytes) + RGBA (16 bytes) = 80 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniforms {
    pub mvp: Mat4,
    pub color: [f32; 4],
}

/// Uniforms for `mesh` inside `frame`: `VP · group · model`, with the
/// material color at its current opacity.
pub fn mesh_uniforms(frame: &SceneFrame<'_>, mesh: &Mesh) -> MeshUniforms {
    let vp = matrix::view_projection(frame.camera);
    let world = matrix::mul(&matrix::model(frame.group), &matrix::model(&mesh.transform));
    MeshUniforms {
        mvp: matrix::mul(&vp, &world),
        color: mesh
            .material
            .color
            .to_f32_with_opacity(mesh.material.opacity),
    }
}
