// Key bindings: physical key -> action, movement step and facing

use glam::IVec2;
use winit::keyboard::KeyCode;

/// What a binding does to the character's horizontal facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlipOverride {
    /// Leave the current facing alone
    #[default]
    Unchanged,
    /// Force the facing; `true` mirrors the sprite
    Set(bool),
}

impl FlipOverride {
    /// Apply the override to a facing flag
    pub fn apply(self, flipped: bool) -> bool {
        match self {
            FlipOverride::Unchanged => flipped,
            FlipOverride::Set(value) => value,
        }
    }
}

/// A single key binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBinding {
    /// Physical key that activates the binding
    pub key: KeyCode,
    /// Name of the action to play while the key is held
    pub action: String,
    /// Movement applied per tick while held
    pub delta: IVec2,
    /// Facing change applied when the key is seen pressed
    pub flip: FlipOverride,
}

impl InputBinding {
    /// Create a binding with no movement and no facing change
    pub fn new(key: KeyCode, action: &str) -> Self {
        Self {
            key,
            action: action.to_string(),
            delta: IVec2::ZERO,
            flip: FlipOverride::Unchanged,
        }
    }

    /// Set the per-tick movement step
    pub fn with_delta(mut self, dx: i32, dy: i32) -> Self {
        self.delta = IVec2::new(dx, dy);
        self
    }

    /// Force the facing when this key is pressed
    pub fn with_flip(mut self, flipped: bool) -> Self {
        self.flip = FlipOverride::Set(flipped);
        self
    }
}

/// Default keyboard bindings, in scan order.
///
/// Keys are physical positions: `KeyW`/`KeyA` are Z/Q on an AZERTY layout.
/// Blocking actions come first so they win over held movement keys.
pub fn default_bindings() -> Vec<InputBinding> {
    vec![
        // Blocking actions
        InputBinding::new(KeyCode::Space, "jump"),
        InputBinding::new(KeyCode::KeyJ, "attack"),
        InputBinding::new(KeyCode::KeyK, "shoot"),
        InputBinding::new(KeyCode::KeyL, "shoot_3_loop"),
        InputBinding::new(KeyCode::KeyR, "recharge"),
        // Movement (ZQSD on AZERTY)
        InputBinding::new(KeyCode::KeyD, "run")
            .with_delta(5, 0)
            .with_flip(false),
        InputBinding::new(KeyCode::KeyA, "run")
            .with_delta(-5, 0)
            .with_flip(true),
        InputBinding::new(KeyCode::KeyW, "run").with_delta(0, -5),
        InputBinding::new(KeyCode::KeyS, "run").with_delta(0, 5),
    ]
}
