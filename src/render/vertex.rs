//! Per-vertex data sent to the GPU.
//!
//! Positions are already in normalized device coordinates — the whole
//! transform pipeline runs on the CPU every frame, so the shader is a
//! passthrough and no camera uniform exists. `#[repr(C)]` plus the
//! bytemuck traits let the frame's vertex list be cast straight to bytes
//! for upload.

use bytemuck::{Pod, Zeroable};

/// A flat-colored quad corner in NDC.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub(crate) struct QuadVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl QuadVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            // color
            wgpu::VertexAttribute {
                offset: 8,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x4,
            },
        ],
    };
}
