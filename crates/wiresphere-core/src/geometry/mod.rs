//! Procedural wireframe and mesh geometry.
//!
//! Everything in here is generated once per configuration and never
//! mutated afterwards; per-frame motion lives in `projection` and the
//! variant modules.

mod mesh;
mod types;
mod wireframe;

pub use mesh::*;
pub use types::*;
pub use wireframe::*;
