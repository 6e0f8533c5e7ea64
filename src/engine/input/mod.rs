// Input handling system
//
// ## Architecture
//
// - `binding`: Key bindings (key -> action, movement step, facing override)
// - `keyboard`: Held-key state fed from winit events
//
// The controller polls a `KeySource` once per tick; there is no event queue
// or input buffering between ticks.

pub mod binding;
pub mod keyboard;

use std::collections::HashSet;
use winit::keyboard::KeyCode;

// Re-export commonly used types
pub use binding::{default_bindings, FlipOverride, InputBinding};
pub use keyboard::KeyboardState;

/// Anything that can answer "is this physical key held right now"
pub trait KeySource {
    fn is_pressed(&self, key: KeyCode) -> bool;
}

impl KeySource for HashSet<KeyCode> {
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.contains(&key)
    }
}

impl KeySource for [KeyCode] {
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.contains(&key)
    }
}
