//! Geometry, animation timelines and scene model for the wiresphere
//! landing animation.
//!
//! Everything here is CPU-side and backend-agnostic: the flat and
//! projected variants produce a [`DrawList`] per frame, the mesh variant
//! maintains a [`Scene`]; a [`RenderBackend`] turns either into pixels.

pub mod backend;
pub mod draw;
pub mod geometry;
pub mod layout;
pub mod projection;
pub mod scene;
pub mod scheduler;
pub mod timeline;
pub mod variants;
pub mod view;

pub use backend::{RenderBackend, Resource, ResourceId};
pub use draw::{Dash, DrawCommand, DrawList, Stroke};
pub use geometry::{generate_edges, Edge, GeometryVariant, MeshGeometry, Point2, Point3};
pub use layout::Layout;
pub use scene::{Light, Material, Mesh, PerspectiveCamera, Scene, SceneFrame, Transform};
pub use scheduler::{Scheduler, TaskHandle};
pub use timeline::{Easing, ParamId, ParameterStore, Phase};
pub use variants::Palette;
pub use view::{FrameTick, SphereView, ViewTask};
