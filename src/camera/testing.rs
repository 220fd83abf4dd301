//! Scripted input source for controller tests.

use std::cell::RefCell;

use glam::Vec2;
use rustc_hash::FxHashSet;

use crate::input::{
    InputSource, Key, MouseButton, MouseState, Signal,
};

/// Fake [`InputSource`] that tests drive by hand: key state is set
/// directly and events are emitted with explicit payloads.
pub(crate) struct ScriptedInput {
    pressed_keys: RefCell<FxHashSet<Key>>,
    key_pressed: Signal<Key>,
    mouse_moved: Signal<MouseState>,
    mouse_button_pressed: Signal<MouseButton>,
    mouse_button_released: Signal<MouseButton>,
    scroll: Signal<Vec2>,
}

impl ScriptedInput {
    pub(crate) fn new() -> Self {
        Self {
            pressed_keys: RefCell::new(FxHashSet::default()),
            key_pressed: Signal::new(),
            mouse_moved: Signal::new(),
            mouse_button_pressed: Signal::new(),
            mouse_button_released: Signal::new(),
            scroll: Signal::new(),
        }
    }

    pub(crate) fn press_key(&self, key: Key) {
        if self.pressed_keys.borrow_mut().insert(key) {
            self.key_pressed.emit(&key);
        }
    }

    pub(crate) fn release_key(&self, key: Key) {
        let _ = self.pressed_keys.borrow_mut().remove(&key);
    }

    pub(crate) fn emit_mouse_move(&self, state: MouseState) {
        self.mouse_moved.emit(&state);
    }

    pub(crate) fn emit_scroll(&self, delta: Vec2) {
        self.scroll.emit(&delta);
    }
}

impl InputSource for ScriptedInput {
    fn is_key_down(&self, key: Key) -> bool {
        self.pressed_keys.borrow().contains(&key)
    }

    fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        let _ = button;
        false
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
