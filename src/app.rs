//! App builder and entry point.
//!
//! [`App`] configures the window (title, size, clear color) and the
//! optional [`Scene`], then runs the event loop.
//!
//! ## Example
//!
//! ```ignore
//! use modelview::prelude::*;
//!
//! fn main() {
//!     env_logger::init();
//!     App::new()
//!         .set_title("two paddles")
//!         .with_scene(Scene::two_paddles())
//!         .run();
//! }
//! ```

use winit::event_loop::EventLoop;

use crate::render::pass::ClearColor;
use crate::scene::Scene;
use crate::window::WinitApp;

/// The app builder. Configure the demo, then call [`run()`](App::run).
pub struct App {
    title: String,
    size: (u32, u32),
    clear_color: ClearColor,
    scene: Option<Scene>,
}

impl App {
    /// Create a new app: 500×500 resizable window, gray clear, no scene.
    pub fn new() -> Self {
        Self {
            title: String::from("modelview"),
            size: (500, 500),
            clear_color: ClearColor::default(),
            scene: None,
        }
    }

    /// Set the window title.
    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set the full-framebuffer clear color (the letterbox bars).
    pub fn clear_color(mut self, rgba: [f64; 4]) -> Self {
        self.clear_color = ClearColor(rgba);
        self
    }

    /// Attach the scene the frame loop updates and draws. Without one the
    /// app just clears the window every frame.
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = Some(scene);
        self
    }

    /// Start the event loop. This function does not return.
    pub fn run(self) -> ! {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        event_loop.set_control_flow(winit::event_loop::ControlFlow::Poll);

        let mut app = WinitApp::new(self.scene, self.title, self.size, self.clear_color);
        event_loop.run_app(&mut app).expect("Event loop error");

        // winit's run_app returns when the event loop exits.
        std::process::exit(0);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
