//! 2D canvas backend: tessellates a [`DrawList`](wiresphere_core::DrawList)
//! into alpha-blended triangles in logical pixel space.

mod renderer;
mod tessellate;
mod types;

pub use renderer::*;
pub use tessellate::*;
pub use types::CanvasVertex;
