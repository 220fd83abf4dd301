//! Auto-rotating orbit controller.

use std::cell::RefCell;
use std::f32::consts::TAU;
use std::rc::Rc;

use glam::Vec3;

use super::core::{Camera, LookAtSettings};
use crate::input::{InputSource, Key};

/// Parameters for an [`OrbitCameraController`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    /// Point the eye circles around and looks at.
    pub target: Vec3,
    /// Orbit radius with no key input.
    pub radius_base: f32,
    /// Maximum deviation from `radius_base` in either direction.
    pub radius_max_delta: f32,
    /// Radius change in units per second while a steering key is held.
    pub radius_change_factor: f32,
    /// Orbit angular speed in radians per second.
    pub angular_speed: f32,
}

/// Moves the camera eye along a horizontal circle of time-varying
/// radius around a fixed target.
///
/// The angle advances on every [`update`](Self::update); holding the
/// Down/Up arrow keys widens/narrows the radius between
/// `radius_base ± radius_max_delta`.
pub struct OrbitCameraController {
    camera: Rc<RefCell<Camera>>,
    input: Rc<dyn InputSource>,
    settings: OrbitSettings,
    radius: f32,
    angle: f32,
}

impl OrbitCameraController {
    /// Create the controller and write the initial orbit pose (angle 0,
    /// base radius) into the camera.
    #[must_use]
    pub fn new(
        camera: Rc<RefCell<Camera>>,
        input: Rc<dyn InputSource>,
        settings: OrbitSettings,
    ) -> Self {
        let mut controller = Self {
            camera,
            input,
            settings,
            radius: settings.radius_base,
            angle: 0.0,
        };
        controller.write_camera_look_at();

        controller
    }

    /// Advance the orbit by `delta_seconds` and commit the new eye
    /// position to the camera.
    pub fn update(&mut self, delta_seconds: f32) {
        self.angle = (self.angle + delta_seconds * self.settings.angular_speed)
            .rem_euclid(TAU);

        self.process_input(delta_seconds);

        self.write_camera_look_at();
    }

    fn process_input(&mut self, delta_seconds: f32) {
        let min_radius =
            self.settings.radius_base - self.settings.radius_max_delta;
        let max_radius =
            self.settings.radius_base + self.settings.radius_max_delta;

        let delta_radius = delta_seconds * self.settings.radius_change_factor;

        if self.input.is_key_down(Key::Down) {
            self.radius += delta_radius;
        } else if self.input.is_key_down(Key::Up) {
            self.radius -= delta_radius;
        }

        self.radius = self.radius.clamp(min_radius, max_radius);
    }

    fn write_camera_look_at(&mut self) {
        let target = self.settings.target;
        let eye = target
            + Vec3::new(
                self.radius * self.angle.sin(),
                0.0,
                self.radius * self.angle.cos(),
            );

        self.camera.borrow_mut().set_look_at(LookAtSettings {
            eye,
            target,
            up: Vec3::Y,
        });
    }
}
