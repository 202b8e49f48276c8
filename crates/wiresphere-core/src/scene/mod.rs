//! Retained 3D scene for the mesh variant.
//!
//! A [`Scene`] owns its backend, camera, lights and one transform group
//! of meshes. Backend resources are released in reverse acquisition order
//! on [`Scene::dispose`] or drop, whichever comes first.

mod camera;
mod graph;
mod light;
mod object;

pub use camera::*;
pub use graph::*;
pub use light::*;
pub use object::*;
