//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
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

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.01, 0.01, 0.04, 1.0];
    /// Board backdrop (deep space)
    pub const BOARD: [f32; 4] = [0.03, 0.02, 0.09, 1.0];
    pub const STAR_DUST: [f32; 4] = [1.0, 1.0, 1.0, 0.7];
    pub const PADDLE: [f32; 4] = [0.55, 0.75, 0.95, 1.0];
    /// Planet body and its ring highlight
    pub const BALL: [f32; 4] = [0.95, 0.6, 0.3, 1.0];
    pub const BALL_GLOW: [f32; 4] = [1.0, 0.8, 0.5, 0.25];
    pub const SCORE: [f32; 4] = [0.9, 0.9, 1.0, 1.0];
    /// Blue glow behind the score digits
    pub const SCORE_GLOW: [f32; 4] = [0.0, 0.0, 1.0, 0.35];
}
