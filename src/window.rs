//! Window management via winit.
//!
//! Implements [`winit::application::ApplicationHandler`] to drive the
//! event loop: window creation, keyboard forwarding, resize, and the
//! per-frame step (timing → input → render).

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::input::{Input, KeyCode};
use crate::render::gpu::GpuContext;
use crate::render::pass::{render_frame, ClearColor};
use crate::render::pipeline::QuadRenderer;
use crate::scene::Scene;
use crate::time::Time;

/// The application state that winit drives.
pub(crate) struct WinitApp {
    scene: Option<Scene>,
    keys: Input<KeyCode>,
    time: Time,
    title: String,
    size: (u32, u32),
    clear_color: ClearColor,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<QuadRenderer>,
    last_fps_log: f32,
}

impl WinitApp {
    pub fn new(
        scene: Option<Scene>,
        title: String,
        size: (u32, u32),
        clear_color: ClearColor,
    ) -> Self {
        Self {
            scene,
            keys: Input::new(),
            time: Time::new(),
            title,
            size,
            clear_color,
            window: None,
            gpu: None,
            renderer: None,
            last_fps_log: 0.0,
        }
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.size.0 as f64,
                    self.size.1 as f64,
                ));
            let window = Arc::new(
                event_loop
                    .create_window(attrs)
                    .expect("Failed to create window"),
            );

            let gpu = GpuContext::new(window.clone());
            self.renderer = Some(QuadRenderer::new(&gpu));
            self.gpu = Some(gpu);

            log::info!("Window created ({}x{})", self.size.0, self.size.1);
            self.window = Some(window);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            if key_code == KeyCode::Escape {
                                log::info!("Escape pressed, exiting.");
                                event_loop.exit();
                            }
                            self.keys.press(key_code);
                        }
                        ElementState::Released => self.keys.release(key_code),
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.time.update();
                if self.time.elapsed_secs() - self.last_fps_log >= 1.0 {
                    self.last_fps_log = self.time.elapsed_secs();
                    log::debug!(
                        "{:.0} fps ({:.2} ms/frame, frame {})",
                        self.time.fps(),
                        self.time.delta_secs() * 1000.0,
                        self.time.frame_count()
                    );
                }

                // Input and draw are strictly sequenced within the frame:
                // held keys mutate the scene, then the scene is rendered.
                if let Some(scene) = &mut self.scene {
                    scene.handle_inputs(&self.keys);
                }
                self.keys.clear_just();

                if let (Some(gpu), Some(renderer)) = (&mut self.gpu, &mut self.renderer) {
                    match render_frame(gpu, renderer, self.scene.as_ref(), self.clear_color) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let (w, h) = gpu.surface_size();
                            gpu.resize(w, h);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of GPU memory!");
                            event_loop.exit();
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                        }
                    }
                }

                // Request next frame.
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}
