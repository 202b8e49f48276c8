pub mod canvas;
pub mod gpu;
pub mod matrix;
pub mod mesh;
pub mod perf;
pub mod render_state;

pub use canvas::{tessellate, CanvasRenderer, CanvasVertex};
pub use gpu::{GpuContext, RendererError};
pub use mesh::MeshRenderer;
pub use perf::{FrameStats, FrameTimer};
pub use render_state::RenderState;
