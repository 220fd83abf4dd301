//! Platform-agnostic input events.
//!
//! These are fed into an [`InputPump`](super::InputPump) which converts
//! them into normalized state and signal emissions. The winit
//! translation layer lives in the `platform` module behind the `viewer`
//! feature; tests construct events directly.

use glam::Vec2;

use super::mouse::MouseButton;

/// Abstract key identifier covering the keys the camera controllers
/// care about.
///
/// Physical keys with no mapping arrive as [`Key::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Z key (controller toggle in the demo viewer).
    Z,
    /// W key (fly forward).
    W,
    /// S key (fly backward).
    S,
    /// A key (fly strafe left).
    A,
    /// D key (fly strafe right).
    D,
    /// Up arrow (orbit radius decrease).
    Up,
    /// Down arrow (orbit radius increase).
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Any key without a mapping.
    Unknown,
}

/// A raw input event, already stripped of platform detail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key pressed or released. Platform auto-repeat may deliver
    /// duplicate pressed events; the pump collapses them.
    Key {
        /// Which key changed.
        key: Key,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor moved to an absolute position in physical pixels.
    CursorMoved {
        /// New cursor position.
        position: Vec2,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel motion; `y` is the vertical amount in lines.
    Scroll {
        /// Scroll offsets.
        delta: Vec2,
    },
}
