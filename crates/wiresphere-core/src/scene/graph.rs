//! The scene container and its resource lifecycle.

use tracing::{debug, info};
use wiresphere_common::{Color, Result, Viewport};

use super::camera::PerspectiveCamera;
use super::light::Light;
use super::object::{Material, Mesh, MeshId, Transform};
use crate::backend::{RenderBackend, Resource, ResourceId};
use crate::geometry::MeshGeometry;

/// Everything a backend needs to draw one scene frame.
#[derive(Debug, Clone, Copy)]
pub struct SceneFrame<'a> {
    pub background: Color,
    pub camera: &'a PerspectiveCamera,
    pub lights: &'a [Light],
    /// Transform applied to every mesh, composed before the mesh's own.
    pub group: &'a Transform,
    pub meshes: &'a [Mesh],
}

/// Camera, lights and one mesh group, bound to a backend.
pub struct Scene<B: RenderBackend> {
    backend: B,
    background: Color,
    camera: PerspectiveCamera,
    lights: Vec<Light>,
    group: Transform,
    meshes: Vec<Mesh>,
    acquired: Vec<ResourceId>,
    disposed: bool,
}

impl<B: RenderBackend> Scene<B> {
    pub fn new(backend: B, camera: PerspectiveCamera, background: Color) -> Self {
        Self {
            backend,
            background,
            camera,
            lights: Vec::new(),
            group: Transform::IDENTITY,
            meshes: Vec::new(),
            acquired: Vec::new(),
            disposed: false,
        }
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Upload `geometry` and `material` and add the mesh to the group.
    ///
    /// Geometry is acquired before its material. If the material fails,
    /// the geometry stays tracked and is released with everything else.
    pub fn add(&mut self, geometry: &MeshGeometry, material: Material) -> Result<MeshId> {
        let geometry_id = self.acquire(Resource::Geometry(geometry))?;
        let material_id = self.acquire(Resource::Material(&material))?;
        self.meshes.push(Mesh {
            geometry: geometry_id,
            material_id,
            material,
            transform: Transform::IDENTITY,
        });
        Ok(MeshId(self.meshes.len() - 1))
    }

    fn acquire(&mut self, resource: Resource<'_>) -> Result<ResourceId> {
        let id = self.backend.acquire(resource)?;
        self.acquired.push(id);
        Ok(id)
    }

    pub fn mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.0)
    }

    pub fn mesh_mut(&mut self, id: MeshId) -> Option<&mut Mesh> {
        self.meshes.get_mut(id.0)
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn group(&self) -> &Transform {
        &self.group
    }

    pub fn group_mut(&mut self) -> &mut Transform {
        &mut self.group
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn set_camera_aspect(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
    }

    /// Update the camera aspect and the backend viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        if self.disposed {
            return;
        }
        self.set_camera_aspect(viewport.aspect());
        self.backend.resize(viewport);
    }

    /// Submit the current state. A no-op once disposed.
    pub fn render_frame(&mut self) -> Result<()> {
        if self.disposed {
            return Ok(());
        }
        let frame = SceneFrame {
            background: self.background,
            camera: &self.camera,
            lights: &self.lights,
            group: &self.group,
            meshes: &self.meshes,
        };
        self.backend.draw_scene(&frame)
    }

    /// Release every resource in reverse acquisition order, then shut
    /// the backend down. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        debug!(resources = self.acquired.len(), "disposing scene");
        while let Some(id) = self.acquired.pop() {
            self.backend.release(id);
        }
        self.meshes.clear();
        self.lights.clear();
        self.backend.shutdown();
        info!("scene disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: RenderBackend> Drop for Scene<B> {
    fn drop(&mut self) {
        self.dispose();
    }
}

// =============================================================================
// Tests
// =============================================================================
