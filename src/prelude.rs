//! Convenience re-exports — `use modelview::prelude::*` for the common items.

pub use crate::app::App;
pub use crate::input::{Input, KeyCode};
pub use crate::math::{Vec2, Vertex};
pub use crate::render::{ClearColor, Color, GpuContext, Letterbox};
pub use crate::scene::{Camera, Paddle, Scene, MOVE_STEP, TURN_STEP, WORLD_EXTENT};
pub use crate::time::Time;
