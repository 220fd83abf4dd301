//! Input handling: platform-agnostic events, normalized device state,
//! and broadcast signals that deliver discrete events to subscribers.

/// Platform-agnostic input events and key codes.
pub mod event;
/// Mouse button bitset and mouse state snapshot.
pub mod mouse;
/// Broadcast channel with revocable, blockable subscriptions.
pub mod signal;
/// The input source seam and its concrete event-pump implementation.
pub mod source;

pub use event::{InputEvent, Key};
pub use mouse::{MouseButton, MouseButtons, MouseState};
pub use signal::{Connection, Signal};
pub use source::{InputPump, InputSource};
