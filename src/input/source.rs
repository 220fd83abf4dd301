//! The input source seam and its concrete event-pump implementation.

use std::cell::{Cell, RefCell};

use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::{InputEvent, Key};
use super::mouse::{MouseButton, MouseState};
use super::signal::Signal;

/// Capability set a camera controller needs from the input system:
/// polled key/button state plus the discrete event channels.
///
/// The crate ships [`InputPump`] as the production implementation;
/// tests drive controllers through fakes implementing this trait.
pub trait InputSource {
    /// Whether `key` is held right now.
    fn is_key_down(&self, key: Key) -> bool;

    /// Whether `button` is held right now.
    fn is_mouse_button_down(&self, button: MouseButton) -> bool;

    /// Fires once per transition into pressed; auto-repeat is ignored.
    fn key_pressed(&self) -> &Signal<Key>;

    /// Fires on every cursor move with the full [`MouseState`].
    fn mouse_moved(&self) -> &Signal<MouseState>;

    /// Fires once per button press transition.
    fn mouse_button_pressed(&self) -> &Signal<MouseButton>;

    /// Fires once per button release transition.
    fn mouse_button_released(&self) -> &Signal<MouseButton>;

    /// Fires on scroll wheel motion with the scroll offsets.
    fn scroll(&self) -> &Signal<Vec2>;
}

/// Normalizes raw [`InputEvent`]s into polled state and signal
/// emissions.
///
/// The pump owns all transient input state: the pressed-key set, the
/// pressed-button bitset, and the cursor baseline used for move
/// deltas. It is constructed explicitly and shared (typically via
/// `Rc`) with whatever owns the frame loop; state updates use interior
/// mutability so sharing needs no locks on the single-threaded loop.
///
/// Event handling always updates state first and emits after, so
/// callbacks observing the pump through [`InputSource`] see the state
/// that includes the event being delivered.
pub struct InputPump {
    pressed_keys: RefCell<FxHashSet<Key>>,
    mouse_state: Cell<MouseState>,
    last_cursor_position: Cell<Option<Vec2>>,

    key_pressed: Signal<Key>,
    mouse_moved: Signal<MouseState>,
    mouse_button_pressed: Signal<MouseButton>,
    mouse_button_released: Signal<MouseButton>,
    scroll: Signal<Vec2>,
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPump {
    /// Create a pump with no keys or buttons pressed and no cursor
    /// baseline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pressed_keys: RefCell::new(FxHashSet::default()),
            mouse_state: Cell::new(MouseState::default()),
            last_cursor_position: Cell::new(None),
            key_pressed: Signal::new(),
            mouse_moved: Signal::new(),
            mouse_button_pressed: Signal::new(),
            mouse_button_released: Signal::new(),
            scroll: Signal::new(),
        }
    }

    /// Current mouse snapshot (same value the last mouse-moved event
    /// carried, buttons updated on press/release).
    #[must_use]
    pub fn mouse_state(&self) -> MouseState {
        self.mouse_state.get()
    }

    /// Ingest one event: update the normalized state, then emit the
    /// matching signal.
    pub fn handle_event(&self, event: InputEvent) {
        match event {
            InputEvent::Key { key, pressed } => {
                self.handle_key(key, pressed);
            }
            InputEvent::CursorMoved { position } => {
                self.handle_cursor_moved(position);
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed);
            }
            InputEvent::Scroll { delta } => {
                self.scroll.emit(&delta);
            }
        }
    }

    fn handle_key(&self, key: Key, pressed: bool) {
        if pressed {
            // Repeated pressed events for a held key are not
            // transitions.
            let is_transition = self.pressed_keys.borrow_mut().insert(key);
            if is_transition {
                self.key_pressed.emit(&key);
            }
        } else {
            let _ = self.pressed_keys.borrow_mut().remove(&key);
        }
    }

    fn handle_cursor_moved(&self, position: Vec2) {
        let delta = self
            .last_cursor_position
            .get()
            .map(|previous| position - previous);
        self.last_cursor_position.set(Some(position));

        let mut state = self.mouse_state.get();
        state.cursor_position = position;
        state.cursor_position_delta = delta;
        self.mouse_state.set(state);

        self.mouse_moved.emit(&state);
    }

    fn handle_mouse_button(&self, button: MouseButton, pressed: bool) {
        if button == MouseButton::None {
            return;
        }

        let mut state = self.mouse_state.get();
        if pressed {
            if state.pressed_buttons.contains(button) {
                return;
            }
            state.pressed_buttons.insert(button);
            self.mouse_state.set(state);
            self.mouse_button_pressed.emit(&button);
        } else {
            if !state.pressed_buttons.contains(button) {
                return;
            }
            state.pressed_buttons.remove(button);
            self.mouse_state.set(state);
            self.mouse_button_released.emit(&button);
        }
    }
}

impl InputSource for InputPump {
    fn is_key_down(&self, key: Key) -> bool {
        self.pressed_keys.borrow().contains(&key)
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.mouse_state.get().pressed_buttons.contains(button)
    }

    fn key_pressed(&self) -> &Signal<Key> {
        &self.key_pressed
    }

    fn mouse_moved(&self) -> &Signal<MouseState> {
        &self.mouse_moved
    }

    fn mouse_button_pressed(&self) -> &Signal<MouseButton> {
        &self.mouse_button_pressed
    }

    fn mouse_button_released(&self) -> &Signal<MouseButton> {
        &self.mouse_button_released
    }

    fn scroll(&self) -> &Signal<Vec2> {
        &self.scroll
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_first_move_has_no_delta() {
        let pump = InputPump::new();
        let seen: Rc<RefCell<Vec<MouseState>>> =
            Rc::new(RefCell::new(Vec::new()));

        let _connection = pump.mouse_moved().connect({
            let seen = Rc::clone(&seen);
            move |state: &MouseState| seen.borrow_mut().push(*state)
        });

        pump.handle_event(InputEvent::CursorMoved {
            position: Vec2::new(100.0, 200.0),
        });
        pump.handle_event(InputEvent::CursorMoved {
            position: Vec2::new(103.0, 198.0),
        });

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].cursor_position_delta.is_none());
        assert_eq!(seen[0].cursor_position, Vec2::new(100.0, 200.0));
        assert_eq!(
            seen[1].cursor_position_delta,
            Some(Vec2::new(3.0, -2.0))
        );
    }

    #[test]
    fn test_key_repeat_is_suppressed() {
        let pump = InputPump::new();
        let presses = Rc::new(RefCell::new(Vec::new()));

        let _connection = pump.key_pressed().connect({
            let presses = Rc::clone(&presses);
            move |key: &Key| presses.borrow_mut().push(*key)
        });

        // Hold W: the OS repeats the pressed event.
        for _ in 0..4 {
            pump.handle_event(InputEvent::Key {
                key: Key::W,
                pressed: true,
            });
        }
        assert!(pump.is_key_down(Key::W));
        assert_eq!(presses.borrow().len(), 1);

        // Release, press again: a new transition.
        pump.handle_event(InputEvent::Key {
            key: Key::W,
            pressed: false,
        });
        assert!(!pump.is_key_down(Key::W));
        pump.handle_event(InputEvent::Key {
            key: Key::W,
            pressed: true,
        });
        assert_eq!(presses.borrow().len(), 2);
    }

    #[test]
    fn test_mouse_button_transitions() {
        let pump = InputPump::new();
        let pressed = Rc::new(RefCell::new(Vec::new()));
        let released = Rc::new(RefCell::new(Vec::new()));

        let _press_connection = pump.mouse_button_pressed().connect({
            let pressed = Rc::clone(&pressed);
            move |button: &MouseButton| pressed.borrow_mut().push(*button)
        });
        let _release_connection = pump.mouse_button_released().connect({
            let released = Rc::clone(&released);
            move |button: &MouseButton| released.borrow_mut().push(*button)
        });

        pump.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        // Duplicate press: no transition.
        pump.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        assert!(pump.is_mouse_button_down(MouseButton::Left));
        assert_eq!(pressed.borrow().len(), 1);

        pump.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert!(!pump.is_mouse_button_down(MouseButton::Left));
        assert_eq!(released.borrow().as_slice(), &[MouseButton::Left]);
    }

    #[test]
    fn test_mouse_moved_carries_pressed_buttons() {
        let pump = InputPump::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _connection = pump.mouse_moved().connect({
            let seen = Rc::clone(&seen);
            move |state: &MouseState| seen.borrow_mut().push(*state)
        });

        pump.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        pump.handle_event(InputEvent::CursorMoved {
            position: Vec2::new(10.0, 10.0),
        });

        let seen = seen.borrow();
        assert!(seen[0].pressed_buttons.contains(MouseButton::Right));
    }

    #[test]
    fn test_scroll_passes_offsets_through() {
        let pump = InputPump::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _connection = pump.scroll().connect({
            let seen = Rc::clone(&seen);
            move |delta: &Vec2| seen.borrow_mut().push(*delta)
        });

        pump.handle_event(InputEvent::Scroll {
            delta: Vec2::new(0.0, -1.0),
        });
        assert_eq!(seen.borrow().as_slice(), &[Vec2::new(0.0, -1.0)]);
    }
}
