//! Translation from winit window events to platform-agnostic input
//! events.
//!
//! The mapping tables cover exactly the keys and buttons the camera
//! controllers and the demo viewer consume; everything else arrives as
//! the `Unknown` sentinel so subscribers can still observe activity.

use glam::Vec2;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{InputEvent, Key, MouseButton};

// Pixel-delta scrolls (touchpads) are much finer grained than line
// deltas; scale them down to roughly line units.
const PIXEL_SCROLL_SCALE: f32 = 0.01;

/// Map a physical key to the abstract [`Key`] set.
#[must_use]
pub fn key_from_winit(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::KeyZ) => Key::Z,
        PhysicalKey::Code(KeyCode::KeyW) => Key::W,
        PhysicalKey::Code(KeyCode::KeyS) => Key::S,
        PhysicalKey::Code(KeyCode::KeyA) => Key::A,
        PhysicalKey::Code(KeyCode::KeyD) => Key::D,
        PhysicalKey::Code(KeyCode::ArrowUp) => Key::Up,
        PhysicalKey::Code(KeyCode::ArrowDown) => Key::Down,
        PhysicalKey::Code(KeyCode::ArrowLeft) => Key::Left,
        PhysicalKey::Code(KeyCode::ArrowRight) => Key::Right,
        _ => Key::Unknown,
    }
}

/// Map a winit mouse button to the abstract [`MouseButton`] set.
#[must_use]
pub fn mouse_button_from_winit(
    button: winit::event::MouseButton,
) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::Unknown,
    }
}

/// Translate a window event into an [`InputEvent`], or `None` for
/// events the input layer does not consume.
#[must_use]
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => Some(InputEvent::Key {
            key: key_from_winit(event.physical_key),
            pressed: event.state == ElementState::Pressed,
        }),
        WindowEvent::CursorMoved { position, .. } => {
            Some(InputEvent::CursorMoved {
                position: Vec2::new(position.x as f32, position.y as f32),
            })
        }
        WindowEvent::MouseInput { state, button, .. } => {
            Some(InputEvent::MouseButton {
                button: mouse_button_from_winit(*button),
                pressed: *state == ElementState::Pressed,
            })
        }
        WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Scroll {
            delta: scroll_delta(delta),
        }),
        _ => None,
    }
}

fn scroll_delta(delta: &MouseScrollDelta) -> Vec2 {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => Vec2::new(*x, *y),
        MouseScrollDelta::PixelDelta(pos) => {
            Vec2::new(pos.x as f32, pos.y as f32) * PIXEL_SCROLL_SCALE
        }
    }
}
