//! # Modelview — Interactive 2D Transform and Camera Demos
//!
//! A small sequence of demos that introduce 2D affine transformations
//! (translate, scale, rotate, rotate about a point) and the
//! model → world → camera → NDC pipeline, by driving two keyboard-controlled
//! paddles inside a letterboxed square viewport.
//!
//! Start with `use modelview::prelude::*`, build a [`Scene`](scene::Scene),
//! and hand it to an [`App`](app::App).

pub mod app;
pub mod input;
pub mod math;
pub mod prelude;
pub mod render;
pub mod scene;
pub mod time;
pub(crate) mod window;
