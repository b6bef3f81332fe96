//! Sphere mesh vertex types and buffer layout.

use serde::Serialize;
use std::mem::{offset_of, size_of};

/// A single vertex of the sphere mesh.
///
/// Layout: position(vec3) + normal(vec3) + color(vec3) + uv(vec2) = 44 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    /// Placeholder tint, always white for the generated sphere.
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

/// One triangle of the index buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable, Serialize)]
pub struct Triangle {
    pub v0: u32,
    pub v1: u32,
    pub v2: u32,
}

impl Triangle {
    pub const fn new(v0: u32, v1: u32, v2: u32) -> Self {
        Self { v0, v1, v2 }
    }

    pub const fn indices(&self) -> [u32; 3] {
        [self.v0, self.v1, self.v2]
    }
}

/// Describes one float attribute inside [`SphereVertex`] for the backend's
/// vertex-array setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader `location` the attribute binds to.
    pub location: u32,
    /// Number of `f32` components.
    pub components: u32,
    /// Byte offset from the start of the vertex.
    pub offset: usize,
    /// Whether the backend should normalize the values on fetch.
    pub normalized: bool,
}

impl SphereVertex {
    /// Byte stride between consecutive vertices.
    pub const STRIDE: usize = size_of::<SphereVertex>();

    /// Attribute table: position (0), normal (1), color (2), uv (3).
    pub const ATTRIBUTES: [VertexAttribute; 4] = [
        VertexAttribute {
            location: 0,
            components: 3,
            offset: offset_of!(SphereVertex, position),
            normalized: false,
        },
        VertexAttribute {
            location: 1,
            components: 3,
            offset: offset_of!(SphereVertex, normal),
            normalized: true,
        },
        VertexAttribute {
            location: 2,
            components: 3,
            offset: offset_of!(SphereVertex, color),
            normalized: true,
        },
        VertexAttribute {
            location: 3,
            components: 2,
            offset: offset_of!(SphereVertex, uv),
            normalized: false,
        },
    ];
}

// =============================================================================
// Tests
// =============================================================================
