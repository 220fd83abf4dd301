//! First-person free-look controller.

use std::cell::RefCell;
use std::f32::consts::{PI, TAU};
use std::rc::Rc;

use glam::{Vec2, Vec3};

use super::core::{Camera, LookAtSettings};
use super::projection::Projection;
use crate::input::{Connection, InputSource, Key, MouseState};

// Strict margin below ±90°: at the poles the look direction becomes
// collinear with world-up and the look-at basis degenerates.
const PITCH_LIMIT: f32 = 0.499 * PI;

/// Parameters for a [`FlyCameraController`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlySettings {
    /// Translation speed in units per second per held movement key.
    pub movement_speed: f32,
    /// Radians of yaw/pitch per pixel of mouse motion.
    pub rotation_sensitivity: f32,
    /// Invert the vertical mouse axis.
    pub must_invert_pitch: bool,
    /// Lower bound for the zoomed vertical FOV, radians.
    pub min_vertical_fov: f32,
    /// Upper bound for the zoomed vertical FOV, radians.
    pub max_vertical_fov: f32,
    /// Radians of FOV change per scroll line.
    pub zoom_sensitivity: f32,
}

struct FlyState {
    yaw: f32,
    pitch: f32,
    look_direction: Vec3,
}

/// First-person free-look: relative mouse motion steers yaw/pitch,
/// W/A/S/D translate the eye, the scroll wheel zooms a perspective
/// projection.
///
/// Construction derives yaw/pitch from the camera's current look
/// direction, so activating the controller never snaps the view.
/// While disabled, [`update`](Self::update) is a no-op and the mouse
/// and scroll subscriptions are blocked; re-enabling resumes delivery
/// without replaying missed events.
pub struct FlyCameraController {
    camera: Rc<RefCell<Camera>>,
    input: Rc<dyn InputSource>,
    settings: FlySettings,
    state: Rc<RefCell<FlyState>>,
    enabled: bool,
    mouse_moved_connection: Connection,
    scroll_connection: Connection,
}

impl FlyCameraController {
    /// Create the controller aligned with the camera's current view and
    /// subscribe to the mouse-moved and scroll channels. Starts
    /// enabled.
    #[must_use]
    pub fn new(
        camera: Rc<RefCell<Camera>>,
        input: Rc<dyn InputSource>,
        settings: FlySettings,
    ) -> Self {
        let look_direction =
            camera.borrow().look_at().normalized_look_direction();
        let yaw = look_direction.z.atan2(look_direction.x).rem_euclid(TAU);
        let pitch =
            look_direction.y.asin().clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let state = Rc::new(RefCell::new(FlyState {
            yaw,
            pitch,
            look_direction,
        }));

        let mouse_moved_connection = input.mouse_moved().connect({
            let state = Rc::clone(&state);
            let sensitivity = settings.rotation_sensitivity;
            let must_invert_pitch = settings.must_invert_pitch;
            move |mouse: &MouseState| {
                on_mouse_moved(
                    &state,
                    mouse,
                    sensitivity,
                    must_invert_pitch,
                );
            }
        });

        let scroll_connection = input.scroll().connect({
            let camera = Rc::clone(&camera);
            move |delta: &Vec2| on_scroll(&camera, &settings, *delta)
        });

        Self {
            camera,
            input,
            settings,
            state,
            enabled: true,
            mouse_moved_connection,
            scroll_connection,
        }
    }

    /// Current yaw in radians, wrapped into `[0, 2π)`.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.state.borrow().yaw
    }

    /// Current pitch in radians, strictly inside `(-π/2, π/2)`.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.state.borrow().pitch
    }

    /// Whether the controller currently reacts to input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the controller. Idempotent.
    ///
    /// Disabling blocks (does not destroy) the mouse and scroll
    /// subscriptions; enabling unblocks them. Events that fired while
    /// disabled are never replayed.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }

        self.enabled = enabled;
        self.mouse_moved_connection.set_blocked(!enabled);
        self.scroll_connection.set_blocked(!enabled);

        log::debug!(
            "fly camera controller {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    /// Apply held movement keys and the current yaw/pitch to the
    /// camera. Entirely a no-op while disabled.
    pub fn update(&mut self, delta_seconds: f32) {
        if !self.enabled {
            return;
        }

        let look_direction = {
            let mut state = self.state.borrow_mut();
            state.look_direction = Vec3::new(
                state.yaw.cos() * state.pitch.cos(),
                state.pitch.sin(),
                state.yaw.sin() * state.pitch.cos(),
            );
            state.look_direction
        };

        let mut look_at = *self.camera.borrow().look_at();
        self.translate(&mut look_at, look_direction, delta_seconds);
        look_at.set_normalized_look_direction(look_direction);

        self.camera.borrow_mut().set_look_at(look_at);
    }

    fn translate(
        &self,
        look_at: &mut LookAtSettings,
        look_direction: Vec3,
        delta_seconds: f32,
    ) {
        let right = look_direction.cross(look_at.up).normalize();
        let step = delta_seconds * self.settings.movement_speed;

        if self.input.is_key_down(Key::W) {
            look_at.eye += look_direction * step;
        }
        if self.input.is_key_down(Key::S) {
            look_at.eye -= look_direction * step;
        }
        if self.input.is_key_down(Key::A) {
            look_at.eye -= right * step;
        }
        if self.input.is_key_down(Key::D) {
            look_at.eye += right * step;
        }
    }
}

fn on_mouse_moved(
    state: &Rc<RefCell<FlyState>>,
    mouse: &MouseState,
    sensitivity: f32,
    must_invert_pitch: bool,
) {
    // The first move event only establishes the cursor baseline.
    let Some(delta) = mouse.cursor_position_delta else {
        return;
    };

    let mut state = state.borrow_mut();

    state.yaw = (state.yaw + delta.x * sensitivity).rem_euclid(TAU);

    let pitch_delta = if must_invert_pitch {
        delta.y * sensitivity
    } else {
        -delta.y * sensitivity
    };
    state.pitch =
        (state.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
}

fn on_scroll(
    camera: &Rc<RefCell<Camera>>,
    settings: &FlySettings,
    delta: Vec2,
) {
    let mut camera = camera.borrow_mut();

    match *camera.projection() {
        Projection::Perspective {
            vertical_fov,
            aspect_ratio,
            near_plane,
            far_plane,
        } => {
            let vertical_fov = (vertical_fov
                - settings.zoom_sensitivity * delta.y)
                .clamp(settings.min_vertical_fov, settings.max_vertical_fov);

            camera.set_projection(Projection::Perspective {
                vertical_fov,
                aspect_ratio,
                near_plane,
                far_plane,
            });
        }
        Projection::Orthographic { .. } => {
            log::debug!(
                "ignoring scroll event: camera projection is orthographic"
            );
        }
    }
}
