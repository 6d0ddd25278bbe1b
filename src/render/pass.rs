//! Per-frame render orchestration and the letterboxed square viewport.
//!
//! Each frame: acquire the surface texture, clear the full framebuffer to
//! the clear color (the letterbox bars), then restrict both the viewport
//! and the scissor to the centered square — NDC now maps onto the square
//! — fill it black with a full-viewport quad, and draw the scene quads on
//! top. The square is recomputed from the live framebuffer size every
//! frame because the window is resizable.

use wgpu::util::DeviceExt;

use crate::scene::Scene;

use super::batch::{collect_scene, push_quad};
use super::gpu::GpuContext;
use super::pipeline::QuadRenderer;
use super::Color;

/// The clear color for the full framebuffer, i.e. the letterbox bars.
#[derive(Debug, Clone, Copy)]
pub struct ClearColor(pub [f64; 4]);

impl Default for ClearColor {
    /// Neutral gray, so the bars read as "outside the world".
    fn default() -> Self {
        Self([0.2, 0.2, 0.2, 1.0])
    }
}

/// The centered square drawing region for a given framebuffer size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letterbox {
    pub x: u32,
    pub y: u32,
    pub side: u32,
}

impl Letterbox {
    /// Square side is `min(width, height)`; offsets center it, truncating
    /// toward zero for odd remainders.
    pub fn compute(width: u32, height: u32) -> Self {
        let side = width.min(height);
        Self {
            x: (width - side) / 2,
            y: (height - side) / 2,
            side,
        }
    }
}

/// Render one frame. The scene is optional: without one the pass only
/// clears the framebuffer (the first demo of the sequence).
pub(crate) fn render_frame(
    gpu: &GpuContext,
    renderer: &mut QuadRenderer,
    scene: Option<&Scene>,
    clear_color: ClearColor,
) -> Result<(), wgpu::SurfaceError> {
    let output = gpu.surface.get_current_texture()?;
    let view = output
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());

    // Backdrop quad fills the square viewport; paddles land on top of it.
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    if let Some(scene) = scene {
        push_quad(
            &mut vertices,
            &mut indices,
            [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]],
            Color::BLACK,
        );
        collect_scene(scene, &mut vertices, &mut indices);
    }

    if vertices.is_empty() {
        renderer.vertex_buffer = None;
        renderer.index_buffer = None;
    } else {
        let vertex_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("quad vertex buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("quad index buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        renderer.vertex_buffer = Some(vertex_buffer);
        renderer.index_buffer = Some(index_buffer);
    }

    let mut encoder = gpu
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("modelview frame encoder"),
        });

    {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("letterboxed scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: clear_color.0[0],
                        g: clear_color.0[1],
                        b: clear_color.0[2],
                        a: clear_color.0[3],
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let (Some(vb), Some(ib)) = (&renderer.vertex_buffer, &renderer.index_buffer) {
            let (width, height) = gpu.surface_size();
            let letterbox = Letterbox::compute(width, height);

            render_pass.set_pipeline(&renderer.pipeline);
            render_pass.set_vertex_buffer(0, vb.slice(..));
            render_pass.set_index_buffer(ib.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.set_viewport(
                letterbox.x as f32,
                letterbox.y as f32,
                letterbox.side as f32,
                letterbox.side as f32,
                0.0,
                1.0,
            );
            render_pass.set_scissor_rect(letterbox.x, letterbox.y, letterbox.side, letterbox.side);
            render_pass.draw_indexed(0..indices.len() as u32, 0, 0..1);
        }
    }

    gpu.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_framebuffer_pads_horizontally() {
        let lb = Letterbox::compute(800, 600);
        assert_eq!(lb, Letterbox { x: 100, y: 0, side: 600 });
    }

    #[test]
    fn tall_framebuffer_pads_vertically() {
        let lb = Letterbox::compute(600, 800);
        assert_eq!(lb, Letterbox { x: 0, y: 100, side: 600 });
    }

    #[test]
    fn square_framebuffer_has_no_bars() {
        let lb = Letterbox::compute(500, 500);
        assert_eq!(lb, Letterbox { x: 0, y: 0, side: 500 });
    }

    #[test]
    fn odd_remainder_truncates() {
        let lb = Letterbox::compute(801, 600);
        assert_eq!(lb, Letterbox { x: 100, y: 0, side: 600 });
    }
}
