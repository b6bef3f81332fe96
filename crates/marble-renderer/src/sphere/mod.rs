//! Textured UV sphere: vertex types and mesh generation.
//!
//! The mesh is generated once and handed to the renderer for upload; nothing
//! here mutates it afterwards.

mod mesh;
mod types;

pub use mesh::*;
pub use types::*;
