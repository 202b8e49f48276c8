use std::sync::Arc;

use tracing::{debug, info, warn};
use winit::window::Window;
use wiresphere_common::{Result, Viewport};
use wiresphere_core::{DrawList, RenderBackend, Resource, ResourceId, SceneFrame};

use super::helpers::physical_extent;
use crate::canvas::{tessellate, CanvasRenderer};
use crate::gpu::{GpuContext, RendererError};
use crate::mesh::{GpuResource, MeshRenderer, ResourceTable};

/// wgpu backend for every sphere variant.
///
/// Canvas variants are tessellated on the CPU each frame; the mesh
/// variant uploads geometry and materials once and only rewrites the
/// per-mesh uniforms per frame. Lights are carried by the scene but the
/// shaders are unlit.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) canvas: CanvasRenderer,
    pub(super) meshes: MeshRenderer,
    pub(super) resources: ResourceTable<GpuResource>,
    pub(super) viewport: Viewport,
    pub(super) scale_factor: f64,
}

impl RenderState {
    pub async fn new(window: Arc<Window>, vsync: bool) -> std::result::Result<Self, RendererError> {
        let scale_factor = window.scale_factor();
        let gpu = GpuContext::new(window, vsync).await?;
        let canvas = CanvasRenderer::new(&gpu.device, gpu.format());
        let meshes = MeshRenderer::new(&gpu.device, gpu.format());
        let viewport = Viewport::new(
            (gpu.size.width as f64 / scale_factor) as f32,
            (gpu.size.height as f64 / scale_factor) as f32,
        );

        Ok(Self {
            gpu,
            canvas,
            meshes,
            resources: ResourceTable::new(),
            viewport,
            scale_factor,
        })
    }

    /// Logical viewport the surface currently covers.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
        let (w, h) = physical_extent(self.viewport, scale_factor);
        self.gpu.resize(w, h);
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}

impl RenderBackend for RenderState {
    fn acquire(&mut self, resource: Resource<'_>) -> Result<ResourceId> {
        let gpu_resource = match resource {
            Resource::Geometry(geometry) => {
                GpuResource::Geometry(self.meshes.create_geometry(&self.gpu.device, geometry))
            }
            Resource::Material(material) => {
                GpuResource::Material(self.meshes.create_material(&self.gpu.device, material))
            }
        };
        let id = self.resources.insert(gpu_resource);
        debug!(id = id.0, "GPU resource acquired");
        Ok(id)
    }

    fn release(&mut self, id: ResourceId) {
        if self.resources.remove(id).is_none() {
            warn!(id = id.0, "release of unknown GPU resource");
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let (w, h) = physical_extent(viewport, self.scale_factor);
        self.gpu.resize(w, h);
    }

    fn draw_canvas(&mut self, list: &DrawList) -> Result<()> {
        let vertices = tessellate(list);
        self.canvas.prepare(
            &self.gpu.device,
            &self.gpu.queue,
            &vertices,
            self.viewport.width,
            self.viewport.height,
        );
        let (output, view, mut encoder) = self.begin_frame("canvas")?;
        {
            let mut pass = Self::clear_pass(&mut encoder, &view, list.clear, "canvas pass");
            self.canvas.render(&mut pass);
        }
        self.finish_frame(output, encoder);
        Ok(())
    }

    fn draw_scene(&mut self, frame: &SceneFrame<'_>) -> Result<()> {
        self.meshes.prepare(&self.gpu.queue, frame, &self.resources);
        let (output, view, mut encoder) = self.begin_frame("scene")?;
        {
            let mut pass = Self::clear_pass(&mut encoder, &view, frame.background, "scene pass");
            self.meshes.render(&mut pass, frame, &self.resources);
        }
        self.finish_frame(output, encoder);
        Ok(())
    }

    fn shutdown(&mut self) {
        let leaked = self.resources.clear();
        if leaked > 0 {
            warn!(leaked, "GPU resources still held at shutdown");
        }
        info!("renderer shut down");
    }
}
