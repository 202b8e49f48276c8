use std::collections::HashMap;

use wiresphere_core::ResourceId;

/// Buffers for one uploaded [`MeshGeometry`](wiresphere_core::MeshGeometry).
pub struct GpuGeometry {
    pub vertex_buffer: wgpu::Buffer,
    pub triangle_buffer: wgpu::Buffer,
    pub triangle_index_count: u32,
    pub edge_buffer: wgpu::Buffer,
    pub edge_index_count: u32,
}

/// Uniform buffer and bind group for one material.
pub struct GpuMaterial {
    pub uniform_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

/// Anything the mesh backend hands out a [`ResourceId`] for.
pub enum GpuResource {
    Geometry(GpuGeometry),
    Material(GpuMaterial),
}

impl GpuResource {
    pub fn as_geometry(&self) -> Option<&GpuGeometry> {
        match self {
            GpuResource::Geometry(g) => Some(g),
            GpuResource::Material(_) => None,
        }
    }

    pub fn as_material(&self) -> Option<&GpuMaterial> {
        match self {
            GpuResource::Material(m) => Some(m),
            GpuResource::Geometry(_) => None,
        }
    }
}

/// Id-keyed storage for backend-owned resources.
///
/// Ids are never reused, so a stale handle can't alias a newer resource.
#[derive(Debug)]
pub struct ResourceTable<T> {
    next_id: u64,
    entries: HashMap<ResourceId, T>,
}

impl<T> ResourceTable<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, value: T) -> ResourceId {
        let id = ResourceId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, value);
        id
    }

    pub fn remove(&mut self, id: ResourceId) -> Option<T> {
        self.entries.remove(&id)
    }

    pub fn get(&self, id: ResourceId) -> Option<&T> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop everything still held, returning how many entries there were.
    pub fn clear(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }
}

impl<T> Default for ResourceTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
