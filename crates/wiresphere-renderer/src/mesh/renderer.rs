use tracing::warn;
use wgpu::util::DeviceExt;
use wiresphere_core::{Material, MeshGeometry, SceneFrame};

use super::resources::{GpuGeometry, GpuMaterial, GpuResource, ResourceTable};
use super::types::{mesh_uniforms, MeshUniforms, MeshVertex};
use crate::matrix::IDENTITY;

pub(crate) const MESH_SHADER: &str = include_str!("../shaders/mesh.wgsl");

/// Pipelines for the three ways a mesh can be drawn.
pub struct MeshRenderer {
    bind_group_layout: wgpu::BindGroupLayout,
    wireframe: wgpu::RenderPipeline,
    faces_double_sided: wgpu::RenderPipeline,
    faces_culled: wgpu::RenderPipeline,
}

impl MeshRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh shader"),
            source: wgpu::ShaderSource::Wgsl(MESH_SHADER.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mesh bind group layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = |label, topology, cull_mode| {
            create_pipeline(device, &layout, &shader, format, label, topology, cull_mode)
        };

        Self {
            wireframe: pipeline("mesh wireframe pipeline", wgpu::PrimitiveTopology::LineList, None),
            faces_double_sided: pipeline(
                "mesh double-sided pipeline",
                wgpu::PrimitiveTopology::TriangleList,
                None,
            ),
            faces_culled: pipeline(
                "mesh culled pipeline",
                wgpu::PrimitiveTopology::TriangleList,
                Some(wgpu::Face::Back),
            ),
            bind_group_layout,
        }
    }

    /// Upload vertices plus both index lists (faces and unique edges).
    pub fn create_geometry(&self, device: &wgpu::Device, geometry: &MeshGeometry) -> GpuGeometry {
        let vertices: Vec<MeshVertex> = geometry
            .positions
            .iter()
            .map(|&position| MeshVertex { position })
            .collect();
        let triangles: Vec<u32> = geometry.triangles.iter().flatten().copied().collect();
        let edges: Vec<u32> = geometry.edge_indices().into_iter().flatten().collect();

        GpuGeometry {
            vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh vertices"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            triangle_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh triangle indices"),
                contents: bytemuck::cast_slice(&triangles),
                usage: wgpu::BufferUsages::INDEX,
            }),
            triangle_index_count: triangles.len() as u32,
            edge_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh edge indices"),
                contents: bytemuck::cast_slice(&edges),
                usage: wgpu::BufferUsages::INDEX,
            }),
            edge_index_count: edges.len() as u32,
        }
    }

    pub fn create_material(&self, device: &wgpu::Device, material: &Material) -> GpuMaterial {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh uniforms"),
            contents: bytemuck::cast_slice(&[MeshUniforms {
                mvp: IDENTITY,
                color: material.color.to_f32_with_opacity(material.opacity),
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("mesh bind group"),
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        GpuMaterial {
            uniform_buffer,
            bind_group,
        }
    }

    /// Write every mesh's uniforms for this frame.
    pub fn prepare(
        &self,
        queue: &wgpu::Queue,
        frame: &SceneFrame<'_>,
        resources: &ResourceTable<GpuResource>,
    ) {
        for mesh in frame.meshes {
            let Some(material) = resources.get(mesh.material_id).and_then(GpuResource::as_material)
            else {
                warn!(id = mesh.material_id.0, "mesh material not uploaded");
                continue;
            };
            let uniforms = mesh_uniforms(frame, mesh);
            queue.write_buffer(&material.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));
        }
    }

    /// Draw meshes in scene order. Fully transparent meshes are skipped.
    pub fn render(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        frame: &SceneFrame<'_>,
        resources: &ResourceTable<GpuResource>,
    ) {
        for mesh in frame.meshes {
            if mesh.material.opacity <= 0.0 {
                continue;
            }
            let geometry = resources.get(mesh.geometry).and_then(GpuResource::as_geometry);
            let material = resources.get(mesh.material_id).and_then(GpuResource::as_material);
            let (Some(geometry), Some(material)) = (geometry, material) else {
                continue;
            };

            let (pipeline, indices, count) = if mesh.material.wireframe {
                (&self.wireframe, &geometry.edge_buffer, geometry.edge_index_count)
            } else if mesh.material.double_sided {
                (
                    &self.faces_double_sided,
                    &geometry.triangle_buffer,
                    geometry.triangle_index_count,
                )
            } else {
                (
                    &self.faces_culled,
                    &geometry.triangle_buffer,
                    geometry.triangle_index_count,
                )
            };

            pass.set_pipeline(pipeline);
            pass.set_bind_group(0, &material.bind_group, &[]);
            pass.set_vertex_buffer(0, geometry.vertex_buffer.slice(..));
            pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..count, 0, 0..1);
        }
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    label: &str,
    topology: wgpu::PrimitiveTopology,
    cull_mode: Option<wgpu::Face>,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: &[MeshVertex::LAYOUT],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}
