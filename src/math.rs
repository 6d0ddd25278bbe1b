//! 2D vertex math and glam re-exports.
//!
//! [`Vertex`] is the value type every paddle corner is built from. All of
//! its transform operations are pure: each one returns a new `Vertex`, so
//! a chain like `v.rotate(r).translate(tx, ty).scale(sx, sy)` reads in
//! application order. Transform composition is non-commutative — callers
//! own the order.

pub use glam::Vec2;

/// A 2D point with pure, chainable transform operations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Move by `(tx, ty)`.
    pub fn translate(self, tx: f32, ty: f32) -> Self {
        Self::new(self.x + tx, self.y + ty)
    }

    /// Scale each axis about the origin.
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    /// Rotate about the origin. Positive angles turn counter-clockwise
    /// (y-up convention).
    pub fn rotate(self, radians: f32) -> Self {
        let rotated = Vec2::from_angle(radians).rotate(Vec2::from(self));
        Self::new(rotated.x, rotated.y)
    }

    /// Rotate about an arbitrary `center`: translate so the center sits at
    /// the origin, rotate there, translate back. The order is load-bearing.
    pub fn rotate_around(self, radians: f32, center: Vertex) -> Self {
        self.translate(-center.x, -center.y)
            .rotate(radians)
            .translate(center.x, center.y)
    }
}

impl From<Vertex> for Vec2 {
    fn from(v: Vertex) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vertex {
    fn from(v: Vec2) -> Self {
        Vertex::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn approx(a: Vertex, b: Vertex) {
        assert!(
            (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn translate_round_trip_is_exact() {
        let v = Vertex::new(3.5, -7.25);
        assert_eq!(v.translate(12.0, -4.5).translate(-12.0, 4.5), v);
    }

    #[test]
    fn rotate_round_trip() {
        let v = Vertex::new(-10.0, 30.0);
        approx(v.rotate(0.7).rotate(-0.7), v);
    }

    #[test]
    fn scale_round_trip() {
        let v = Vertex::new(4.0, -9.0);
        approx(v.scale(2.5, 0.4).scale(1.0 / 2.5, 1.0 / 0.4), v);
    }

    #[test]
    fn quarter_turn_counter_clockwise() {
        // (1, 0) rotated +90° lands on (0, 1) under the y-up convention.
        approx(Vertex::new(1.0, 0.0).rotate(PI / 2.0), Vertex::new(0.0, 1.0));
    }

    #[test]
    fn half_turn_reflects_through_origin() {
        approx(Vertex::new(-10.0, -30.0).rotate(PI), Vertex::new(10.0, 30.0));
    }

    #[test]
    fn rotate_around_fixes_the_center() {
        let center = Vertex::new(17.0, -3.0);
        approx(center.rotate_around(1.234, center), center);
    }

    #[test]
    fn rotate_around_origin_matches_rotate() {
        let v = Vertex::new(5.0, 8.0);
        approx(v.rotate_around(0.9, Vertex::default()), v.rotate(0.9));
    }
}
