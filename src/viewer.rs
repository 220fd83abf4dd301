//! Standalone demo window backed by winit.
//!
//! Opens a window, wires an [`InputPump`] to a camera and both
//! controllers, and drives them every frame: events are dispatched
//! first, then the active controller's `update(dt)` commits the
//! look-at, then the matrices are read exactly as a renderer would
//! read them. Nothing is drawn; the window exists to source real
//! input events. The Z key toggles between the orbit and fly
//! controllers, Escape quits.
//!
//! ```no_run
//! # use vantage::Viewer;
//! Viewer::builder().build().run().unwrap();
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;

use glam::Vec3;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::camera::{
    Camera, FlyCameraController, LookAtSettings, OrbitCameraController,
    Projection,
};
use crate::error::VantageError;
use crate::input::{Connection, InputPump, InputSource, Key};
use crate::options::Options;
use crate::platform;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Options,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.options.window.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window driving the camera rig with live input.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and block on the event loop until it closes.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Viewer`] if the event loop cannot be
    /// created or fails while running.
    pub fn run(self) -> Result<(), VantageError> {
        let event_loop = EventLoop::new()
            .map_err(|e| VantageError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            options: self.options,
            window: None,
            rig: None,
            last_frame_time: Instant::now(),
        };
        event_loop
            .run_app(&mut app)
            .map_err(|e| VantageError::Viewer(e.to_string()))
    }
}

// ── Camera rig ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveController {
    Orbit,
    Fly,
}

/// One camera, both controllers, and the pump feeding them.
struct CameraRig {
    pump: Rc<InputPump>,
    camera: Rc<RefCell<Camera>>,
    orbit: OrbitCameraController,
    fly: FlyCameraController,
    active: ActiveController,
    toggle_requested: Rc<Cell<bool>>,
    // Held so the Z-key subscription stays alive with the rig.
    _toggle_connection: Connection,
}

impl CameraRig {
    fn new(options: &Options) -> Self {
        let pump = Rc::new(InputPump::new());
        let orbit_settings = options.orbit.to_settings();

        let camera = Rc::new(RefCell::new(Camera::new(
            LookAtSettings {
                eye: orbit_settings.target
                    + Vec3::new(0.0, 0.0, orbit_settings.radius_base),
                target: orbit_settings.target,
                up: Vec3::Y,
            },
            options
                .camera
                .to_projection(options.window.aspect_ratio()),
        )));

        let orbit = OrbitCameraController::new(
            Rc::clone(&camera),
            pump.clone(),
            orbit_settings,
        );
        let mut fly = FlyCameraController::new(
            Rc::clone(&camera),
            pump.clone(),
            options.fly.to_settings(),
        );
        // The orbit controller starts active.
        fly.set_enabled(false);

        let toggle_requested = Rc::new(Cell::new(false));
        let toggle_connection = pump.key_pressed().connect({
            let toggle_requested = Rc::clone(&toggle_requested);
            move |key: &Key| {
                if *key == Key::Z {
                    toggle_requested.set(true);
                }
            }
        });

        Self {
            pump,
            camera,
            orbit,
            fly,
            active: ActiveController::Orbit,
            toggle_requested,
            _toggle_connection: toggle_connection,
        }
    }

    fn update(&mut self, delta_seconds: f32) {
        if self.toggle_requested.take() {
            self.toggle_active();
        }

        match self.active {
            ActiveController::Orbit => self.orbit.update(delta_seconds),
            ActiveController::Fly => self.fly.update(delta_seconds),
        }

        // Read the matrices the way a renderer would.
        let camera = self.camera.borrow();
        let look_at_matrix = camera.look_at_matrix();
        let projection_matrix = camera.projection_matrix();
        log::trace!(
            "eye {} view {look_at_matrix} projection {projection_matrix}",
            camera.look_at().eye
        );
    }

    fn toggle_active(&mut self) {
        self.active = match self.active {
            ActiveController::Orbit => {
                self.fly.set_enabled(true);
                ActiveController::Fly
            }
            ActiveController::Fly => {
                self.fly.set_enabled(false);
                ActiveController::Orbit
            }
        };

        log::info!("switched to {:?} camera controller", self.active);
    }

    fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        let mut camera = self.camera.borrow_mut();
        if let Projection::Perspective {
            vertical_fov,
            near_plane,
            far_plane,
            ..
        } = *camera.projection()
        {
            camera.set_projection(Projection::Perspective {
                vertical_fov,
                aspect_ratio,
                near_plane,
                far_plane,
            });
        }
    }
}

// ── Event loop ───────────────────────────────────────────────────────────

struct ViewerApp {
    options: Options,
    window: Option<Window>,
    rig: Option<CameraRig>,
    last_frame_time: Instant,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.options.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.options.window.width,
                self.options.window.height,
            ));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                log::info!(
                    "opened {}x{} window",
                    self.options.window.width,
                    self.options.window.height
                );
                self.window = Some(window);
                self.rig = Some(CameraRig::new(&self.options));
                self.last_frame_time = Instant::now();
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(rig) = &mut self.rig {
                    if size.height > 0 {
                        rig.set_aspect_ratio(
                            size.width as f32 / size.height as f32,
                        );
                    }
                }
            }

            event => {
                let Some(rig) = &self.rig else {
                    return;
                };

                if let Some(input_event) =
                    platform::translate_window_event(&event)
                {
                    rig.pump.handle_event(input_event);
                }

                if rig.pump.is_key_down(Key::Escape) {
                    event_loop.exit();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let delta_seconds =
            now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        if let Some(rig) = &mut self.rig {
            rig.update(delta_seconds);
        }
    }
}
