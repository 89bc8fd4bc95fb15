//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (arena pixels) and color
///
/// `repr(C)` + `Pod` so a backend can upload a `&[Vertex]` with
/// `bytemuck::cast_slice` unchanged.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride between consecutive vertices
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Flatten vertices into the byte layout a GPU buffer expects
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const ARENA_WALL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PLAYER: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const GUN: [f32; 4] = [0.65, 0.16, 0.16, 1.0];
    pub const TARGET: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const COMPASS: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const TRACER: [f32; 4] = [0.92, 0.1, 0.2, 1.0];
    pub const PROJECTILE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const DAMAGE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const DAMAGE_HEADSHOT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const HUD_TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
