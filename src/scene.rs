//! Paddles, camera, and the per-frame input mapping.
//!
//! [`Scene`] owns everything the frame loop mutates and draws: two paddles
//! and the camera position. It is passed by reference into the input and
//! render steps — there are no globals.
//!
//! The heart of the module is [`Paddle::ndc_vertices`]: the per-vertex
//! model → world → camera → NDC pipeline, recomputed from the model-space
//! quad every frame.

use glam::Vec2;

use crate::input::{Input, KeyCode};
use crate::math::Vertex;
use crate::render::Color;

/// Visible world extent per axis: world coordinates span ±`WORLD_EXTENT`
/// and the final NDC scale is `1 / WORLD_EXTENT`. A fixed convention, not
/// a configurable projection.
pub const WORLD_EXTENT: f32 = 100.0;

/// World units a held movement key adds per frame.
pub const MOVE_STEP: f32 = 10.0;

/// Radians a held rotation key adds per frame.
pub const TURN_STEP: f32 = 0.1;

/// A rectangular paddle: four model-space vertices plus world placement.
///
/// `global_position` is fixed at construction; `rotation` and `offset` are
/// the input-driven state. `rotation` is never normalized — it wraps
/// implicitly through trig periodicity.
pub struct Paddle {
    vertices: [Vertex; 4],
    pub color: Color,
    global_position: Vertex,
    pub rotation: f32,
    pub offset: Vec2,
}

impl Paddle {
    /// A paddle from four model-space vertices. Insertion order defines
    /// the quad winding.
    pub fn new(vertices: [Vertex; 4], color: Color, global_position: Vertex) -> Self {
        Self {
            vertices,
            color,
            global_position,
            rotation: 0.0,
            offset: Vec2::ZERO,
        }
    }

    /// The ±10 × ±30 quad used throughout the demo sequence, symmetric
    /// around the model-space origin.
    pub fn standard(color: Color, global_position: Vertex) -> Self {
        Self::new(
            [
                Vertex::new(-10.0, -30.0),
                Vertex::new(10.0, -30.0),
                Vertex::new(10.0, 30.0),
                Vertex::new(-10.0, 30.0),
            ],
            color,
            global_position,
        )
    }

    /// Run every model-space vertex through the full pipeline, in exactly
    /// this order: rotate by `self.rotation`, translate to the global
    /// position, translate by the per-frame offset, translate by the
    /// negative camera position, scale into NDC.
    ///
    /// Rotation comes first so the paddle spins in place; translating
    /// before rotating would orbit it around the world origin instead.
    pub fn ndc_vertices(&self, camera: &Camera) -> [Vertex; 4] {
        self.vertices.map(|v| {
            v.rotate(self.rotation)
                .translate(self.global_position.x, self.global_position.y)
                .translate(self.offset.x, self.offset.y)
                .translate(-camera.position.x, -camera.position.y)
                .scale(1.0 / WORLD_EXTENT, 1.0 / WORLD_EXTENT)
        })
    }
}

/// The world-space camera position, subtracted from every vertex before
/// the NDC scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Camera {
    pub position: Vec2,
}

/// Everything the frame loop owns: two paddles and the camera.
pub struct Scene {
    pub paddle1: Paddle,
    pub paddle2: Paddle,
    pub camera: Camera,
}

impl Scene {
    /// The two-paddle scene from the demo sequence: a purple paddle at
    /// (−90, 0) and a red one at (90, 0), camera at the origin.
    pub fn two_paddles() -> Self {
        Self {
            paddle1: Paddle::standard(Color::rgb(0.578123, 0.0, 1.0), Vertex::new(-90.0, 0.0)),
            paddle2: Paddle::standard(Color::RED, Vertex::new(90.0, 0.0)),
            camera: Camera::default(),
        }
    }

    /// Apply one frame of input. Each held key is checked independently
    /// and applies its fixed increment, so several keys combine freely.
    ///
    /// Increments are per frame, not scaled by delta time: motion speed
    /// follows the frame rate. A known limitation, kept deliberately.
    pub fn handle_inputs(&mut self, keys: &Input<KeyCode>) {
        if keys.pressed(KeyCode::ArrowUp) {
            self.camera.position.y += MOVE_STEP;
        }
        if keys.pressed(KeyCode::ArrowDown) {
            self.camera.position.y -= MOVE_STEP;
        }
        if keys.pressed(KeyCode::ArrowLeft) {
            self.camera.position.x -= MOVE_STEP;
        }
        if keys.pressed(KeyCode::ArrowRight) {
            self.camera.position.x += MOVE_STEP;
        }

        if keys.pressed(KeyCode::KeyW) {
            self.paddle1.offset.y += MOVE_STEP;
        }
        if keys.pressed(KeyCode::KeyS) {
            self.paddle1.offset.y -= MOVE_STEP;
        }
        if keys.pressed(KeyCode::KeyA) {
            self.paddle1.rotation += TURN_STEP;
        }
        if keys.pressed(KeyCode::KeyD) {
            self.paddle1.rotation -= TURN_STEP;
        }

        if keys.pressed(KeyCode::KeyI) {
            self.paddle2.offset.y += MOVE_STEP;
        }
        if keys.pressed(KeyCode::KeyK) {
            self.paddle2.offset.y -= MOVE_STEP;
        }
        if keys.pressed(KeyCode::KeyJ) {
            self.paddle2.rotation += TURN_STEP;
        }
        if keys.pressed(KeyCode::KeyL) {
            self.paddle2.rotation -= TURN_STEP;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn approx(a: Vertex, x: f32, y: f32) {
        assert!(
            (a.x - x).abs() < 1e-5 && (a.y - y).abs() < 1e-5,
            "{a:?} != ({x}, {y})"
        );
    }

    #[test]
    fn rest_scene_maps_model_vertex_to_expected_ndc() {
        let scene = Scene::two_paddles();
        let ndc = scene.paddle1.ndc_vertices(&scene.camera);
        // Model (−10, −30) at global (−90, 0): (−90−10)/100, (0−30)/100.
        approx(ndc[0], -1.0, -0.3);
    }

    #[test]
    fn one_frame_of_w_raises_paddle1_a_tenth_of_ndc() {
        let mut scene = Scene::two_paddles();
        let before = scene.paddle1.ndc_vertices(&scene.camera);

        let mut keys = Input::new();
        keys.press(KeyCode::KeyW);
        scene.handle_inputs(&keys);

        let after = scene.paddle1.ndc_vertices(&scene.camera);
        for (b, a) in before.iter().zip(after.iter()) {
            approx(*a, b.x, b.y + MOVE_STEP / WORLD_EXTENT);
        }
    }

    #[test]
    fn half_turn_reflects_the_quad_in_place() {
        let mut scene = Scene::two_paddles();
        scene.paddle1.rotation = PI;
        let ndc = scene.paddle1.ndc_vertices(&scene.camera);
        // Model (−10, −30) reflects to (10, 30) before translation.
        approx(ndc[0], (-90.0 + 10.0) / 100.0, 30.0 / 100.0);
    }

    #[test]
    fn camera_motion_shifts_both_paddles_opposite() {
        let mut scene = Scene::two_paddles();
        let before = scene.paddle2.ndc_vertices(&scene.camera);

        let mut keys = Input::new();
        keys.press(KeyCode::ArrowRight);
        scene.handle_inputs(&keys);

        let after = scene.paddle2.ndc_vertices(&scene.camera);
        approx(after[0], before[0].x - MOVE_STEP / WORLD_EXTENT, before[0].y);
    }

    #[test]
    fn rotation_key_signs() {
        let mut scene = Scene::two_paddles();

        let mut keys = Input::new();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::KeyL);
        scene.handle_inputs(&keys);

        assert_eq!(scene.paddle1.rotation, TURN_STEP);
        assert_eq!(scene.paddle2.rotation, -TURN_STEP);
    }

    #[test]
    fn held_keys_combine_and_accumulate() {
        let mut scene = Scene::two_paddles();

        let mut keys = Input::new();
        keys.press(KeyCode::ArrowUp);
        keys.press(KeyCode::KeyS);
        scene.handle_inputs(&keys);
        scene.handle_inputs(&keys);

        assert_eq!(scene.camera.position.y, 2.0 * MOVE_STEP);
        assert_eq!(scene.paddle1.offset.y, -2.0 * MOVE_STEP);
    }

    #[test]
    fn unbound_keys_change_nothing() {
        let mut scene = Scene::two_paddles();

        let mut keys = Input::new();
        keys.press(KeyCode::KeyZ);
        scene.handle_inputs(&keys);

        assert_eq!(scene.camera.position, Vec2::ZERO);
        assert_eq!(scene.paddle1.offset, Vec2::ZERO);
        assert_eq!(scene.paddle1.rotation, 0.0);
    }
}
