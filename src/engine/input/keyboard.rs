// Pressed-key state fed from winit keyboard events

use super::KeySource;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Set of physical keys currently held down.
///
/// Only "is this key down right now" is tracked; press and release edges are
/// not queued.
#[derive(Debug, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only track physical key codes
        if let PhysicalKey::Code(key_code) = event.physical_key {
            match event.state {
                ElementState::Pressed => self.press(key_code),
                ElementState::Released => self.release(key_code),
            }
        }
    }

    /// Register a key press (auto-repeat presses are idempotent)
    pub fn press(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    /// Register a key release
    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
    }

    /// Forget every held key, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    /// Number of keys currently held
    pub fn pressed_count(&self) -> usize {
        self.pressed.len()
    }
}

impl KeySource for KeyboardState {
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}
