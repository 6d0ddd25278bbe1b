//! Two-paddle demo: the full model → world → camera → NDC pipeline.
//!
//! Arrow keys move the camera. W/S and A/D drive the left paddle's offset
//! and rotation; I/K and J/L drive the right paddle's. Escape exits.

use modelview::prelude::*;

fn main() {
    env_logger::init();
    log::info!("modelview starting");

    App::new()
        .set_title("modelview — two paddles")
        .with_scene(Scene::two_paddles())
        .run();
}
