//! The first demo of the sequence: open a window, clear it to black every
//! frame, exit on Escape or window close. No scene, no transforms — just
//! the frame loop.

use modelview::prelude::*;

fn main() {
    env_logger::init();

    App::new()
        .set_title("modelview — clear window")
        .clear_color([0.0, 0.0, 0.0, 1.0])
        .run();
}
