// Character state machine data

use super::definition::{ActionId, PlaybackMode};
use crate::core::Rect;

/// Which kind of blocking action holds the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockMode {
    Once,
    Combo,
}

/// Observable state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerState {
    /// Playing the idle loop
    Idle,
    /// Playing a looping, input-driven action
    Moving(ActionId),
    /// Playing a blocking action; input is ignored until it ends
    Locked(ActionId, LockMode),
}

/// Mutable per-character state, owned by the controller
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterState {
    pub current_action: ActionId,
    /// Index into the current action's frames
    pub frame_index: usize,
    /// Phase toward the next frame, in [0, 1)
    pub timer: f32,
    /// Set while a blocking action plays
    pub is_busy: bool,
    /// Combo replays still to come
    pub repeat_counter: u32,
    /// Sprite is mirrored horizontally
    pub flipped: bool,
    /// Physical position; the sprite follows it
    pub hitbox: Rect,
}

impl CharacterState {
    /// Fresh state for a character spawned with `hitbox`
    pub fn spawn(idle: ActionId, hitbox: Rect) -> Self {
        Self {
            current_action: idle,
            frame_index: 0,
            timer: 0.0,
            is_busy: false,
            repeat_counter: 0,
            flipped: false,
            hitbox,
        }
    }

    /// Switch to a looping action from its first frame
    pub fn play(&mut self, action: ActionId) {
        self.current_action = action;
        self.frame_index = 0;
        self.timer = 0.0;
    }

    /// Start a blocking action; input is ignored until it finishes
    pub fn lock(&mut self, action: ActionId, mode: PlaybackMode) {
        self.play(action);
        self.is_busy = true;
        self.repeat_counter = mode.repeats();
    }

    /// End a blocking action and fall back to `idle`.
    /// The timer keeps its leftover phase.
    pub fn release(&mut self, idle: ActionId) {
        self.is_busy = false;
        self.repeat_counter = 0;
        self.current_action = idle;
        self.frame_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::definition::{ActionDefinition, ActionTable};

    fn table() -> ActionTable {
        ActionTable::new(vec![
            ActionDefinition::looping("idle", 2, 0.5),
            ActionDefinition::looping("run", 4, 0.5),
            ActionDefinition::combo("burst", 3, 0.5, 2),
        ])
        .unwrap()
    }

    #[test]
    fn test_spawn_state() {
        let table = table();
        let state = CharacterState::spawn(table.idle(), Rect::new(0, 0, 4, 4));
        assert_eq!(state.current_action, table.idle());
        assert_eq!(state.frame_index, 0);
        assert!(!state.is_busy);
        assert!(!state.flipped);
    }

    #[test]
    fn test_play_resets_frame_and_timer() {
        let table = table();
        let mut state = CharacterState::spawn(table.idle(), Rect::default());
        state.frame_index = 1;
        state.timer = 0.5;

        state.play(table.id("run").unwrap());
        assert_eq!(state.frame_index, 0);
        assert_eq!(state.timer, 0.0);
        assert!(!state.is_busy);
    }

    #[test]
    fn test_lock_and_release() {
        let table = table();
        let burst = table.id("burst").unwrap();
        let mut state = CharacterState::spawn(table.idle(), Rect::default());

        state.lock(burst, table.get(burst).mode);
        assert!(state.is_busy);
        assert_eq!(state.repeat_counter, 2);
        assert_eq!(state.current_action, burst);

        state.timer = 0.25;
        state.release(table.idle());
        assert!(!state.is_busy);
        assert_eq!(state.current_action, table.idle());
        assert_eq!(state.timer, 0.25);
    }
}
