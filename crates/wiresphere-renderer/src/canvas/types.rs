/// A tessellated canvas vertex in logical pixels with straight RGBA.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct CanvasVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl CanvasVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<CanvasVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec2<f32>
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            },
            // color: vec4<f32>
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 8,
                shader_location: 1,
            },
        ],
    };
}

/// Viewport resolution for the pixel → NDC conversion.
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct CanvasUniforms {
    pub resolution: [f32; 2],
    pub _pad: [f32; 2],
}

/// Initial vertex buffer capacity; grows to the next power of two.
pub(crate) const INITIAL_VERTEX_CAPACITY: usize = 8192;
