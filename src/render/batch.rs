//! CPU-side geometry build: scene state → vertex/index data.
//!
//! Every frame the paddle quads are recomputed from their model-space
//! vertices and emitted as two triangles each. Nothing is cached across
//! frames; the vertex set is a pure function of the scene state.

use crate::render::Color;
use crate::scene::Scene;

use super::vertex::QuadVertex;

/// Index pattern for one quad: two triangles over vertices 0..4 in
/// insertion-order winding, the same footprint GL_QUADS produced.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Append one flat-colored quad.
pub(crate) fn push_quad(
    vertices: &mut Vec<QuadVertex>,
    indices: &mut Vec<u32>,
    corners: [[f32; 2]; 4],
    color: Color,
) {
    let base = vertices.len() as u32;
    let rgba = color.to_array();
    for position in corners {
        vertices.push(QuadVertex {
            position,
            color: rgba,
        });
    }
    indices.extend(QUAD_INDICES.iter().map(|i| base + i));
}

/// Emit the NDC quads for every paddle in the scene.
pub(crate) fn collect_scene(
    scene: &Scene,
    vertices: &mut Vec<QuadVertex>,
    indices: &mut Vec<u32>,
) {
    for paddle in [&scene.paddle1, &scene.paddle2] {
        let ndc = paddle.ndc_vertices(&scene.camera);
        push_quad(vertices, indices, ndc.map(|v| [v.x, v.y]), paddle.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_paddles_emit_two_quads() {
        let scene = Scene::two_paddles();
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        collect_scene(&scene, &mut vertices, &mut indices);

        assert_eq!(vertices.len(), 8);
        assert_eq!(indices.len(), 12);
        for &idx in &indices {
            assert!((idx as usize) < vertices.len(), "index {idx} out of range");
        }
        // Second quad reuses the pattern offset by its base vertex.
        assert_eq!(&indices[6..], &[4, 5, 6, 4, 6, 7][..]);
    }

    #[test]
    fn push_quad_offsets_indices_by_base() {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let corners = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        push_quad(&mut vertices, &mut indices, corners, Color::BLACK);
        push_quad(&mut vertices, &mut indices, corners, Color::WHITE);

        assert_eq!(&indices[..6], &[0, 1, 2, 0, 2, 3][..]);
        assert_eq!(&indices[6..], &[4, 5, 6, 4, 6, 7][..]);
    }

    #[test]
    fn emitted_corners_preserve_insertion_order() {
        let scene = Scene::two_paddles();
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        collect_scene(&scene, &mut vertices, &mut indices);

        let ndc = scene.paddle1.ndc_vertices(&scene.camera);
        for (emitted, expected) in vertices[..4].iter().zip(ndc.iter()) {
            assert_eq!(emitted.position, [expected.x, expected.y]);
        }
    }
}
