// Action definitions: frame counts, rates and playback modes

use super::config::ConfigError;
use super::state::LockMode;
use std::collections::HashMap;

/// Index of an action inside the `ActionTable` that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(usize);

impl ActionId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// How an animation behaves when it runs past its last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackMode {
    /// Wrap to the first frame forever
    Loop,
    /// Play once, then hand control back (returns to idle)
    Once,
    /// Play `1 + repeats` times back to back, then return to idle
    Combo { repeats: u32 },
}

impl PlaybackMode {
    /// Blocking actions ignore input until they finish
    pub fn is_blocking(&self) -> bool {
        self.lock_mode().is_some()
    }

    pub fn lock_mode(&self) -> Option<LockMode> {
        match self {
            PlaybackMode::Loop => None,
            PlaybackMode::Once => Some(LockMode::Once),
            PlaybackMode::Combo { .. } => Some(LockMode::Combo),
        }
    }

    /// Replays left after the first pass
    pub fn repeats(&self) -> u32 {
        match self {
            PlaybackMode::Combo { repeats } => *repeats,
            _ => 0,
        }
    }
}

/// Static description of one named action
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDefinition {
    /// Name of the action (e.g., "idle", "run", "attack")
    pub name: String,
    /// Number of frames on the sprite sheet
    pub frame_count: usize,
    /// Phase added per tick; a frame advances each time the phase reaches 1.
    /// At most `MAX_FRAME_DURATION`, so one tick never skips a frame.
    pub frame_duration: f32,
    pub mode: PlaybackMode,
    /// Sprite sheet file name, relative to the animations directory
    pub sheet: String,
}

impl ActionDefinition {
    pub fn new(name: &str, frame_count: usize, frame_duration: f32, mode: PlaybackMode) -> Self {
        Self {
            name: name.to_string(),
            frame_count,
            frame_duration,
            mode,
            sheet: format!("{name}.png"),
        }
    }

    /// Create a looping action
    pub fn looping(name: &str, frame_count: usize, frame_duration: f32) -> Self {
        Self::new(name, frame_count, frame_duration, PlaybackMode::Loop)
    }

    /// Create a blocking action that plays once
    pub fn once(name: &str, frame_count: usize, frame_duration: f32) -> Self {
        Self::new(name, frame_count, frame_duration, PlaybackMode::Once)
    }

    /// Create a blocking action that replays `repeats` extra times
    pub fn combo(name: &str, frame_count: usize, frame_duration: f32, repeats: u32) -> Self {
        Self::new(
            name,
            frame_count,
            frame_duration,
            PlaybackMode::Combo { repeats },
        )
    }

    /// Use a specific sprite sheet file
    pub fn with_sheet(mut self, sheet: &str) -> Self {
        self.sheet = sheet.to_string();
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_count == 0 {
            return Err(ConfigError::NoFrames(self.name.clone()));
        }
        if !(self.frame_duration > 0.0 && self.frame_duration <= MAX_FRAME_DURATION) {
            return Err(ConfigError::InvalidFrameDuration {
                action: self.name.clone(),
                duration: self.frame_duration,
            });
        }
        if let PlaybackMode::Combo { repeats: 0 } = self.mode {
            return Err(ConfigError::NoComboRepeats(self.name.clone()));
        }
        Ok(())
    }
}

/// Largest phase step per tick: one frame per tick
pub const MAX_FRAME_DURATION: f32 = 1.0;

/// Name of the action every character falls back to
pub const IDLE: &str = "idle";

/// Validated, immutable set of action definitions
#[derive(Debug, Clone)]
pub struct ActionTable {
    actions: Vec<ActionDefinition>,
    by_name: HashMap<String, ActionId>,
    idle: ActionId,
}

impl ActionTable {
    /// Validate definitions and build the table.
    ///
    /// Fails on duplicate names, empty animations, frame durations outside
    /// `(0, MAX_FRAME_DURATION]`, combos without repeats, and a missing or
    /// non-looping `idle` action.
    pub fn new(actions: Vec<ActionDefinition>) -> Result<Self, ConfigError> {
        let mut by_name = HashMap::with_capacity(actions.len());

        for (index, action) in actions.iter().enumerate() {
            action.validate()?;
            if by_name.insert(action.name.clone(), ActionId(index)).is_some() {
                return Err(ConfigError::DuplicateAction(action.name.clone()));
            }
        }

        let idle = *by_name.get(IDLE).ok_or(ConfigError::MissingIdle)?;
        if actions[idle.index()].mode != PlaybackMode::Loop {
            return Err(ConfigError::IdleNotLooping);
        }

        Ok(Self {
            actions,
            by_name,
            idle,
        })
    }

    /// The default action set for the player character
    pub fn standard() -> Result<Self, ConfigError> {
        Self::new(vec![
            ActionDefinition::looping("idle", 6, 0.1).with_sheet("Idle.png"),
            ActionDefinition::looping("run", 10, 0.2).with_sheet("Run.png"),
            ActionDefinition::once("jump", 10, 0.1).with_sheet("Jump.png"),
            ActionDefinition::once("attack", 6, 0.2).with_sheet("Attack.png"),
            ActionDefinition::once("shoot", 4, 0.2).with_sheet("Shot.png"),
            ActionDefinition::combo("shoot_3_loop", 4, 0.25, 2).with_sheet("Shot.png"),
            ActionDefinition::once("recharge", 8, 0.15).with_sheet("Recharge.png"),
            ActionDefinition::once("death", 6, 0.1).with_sheet("Dead.png"),
        ])
    }

    /// Look up an action by name
    pub fn id(&self, name: &str) -> Option<ActionId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: ActionId) -> &ActionDefinition {
        &self.actions[id.index()]
    }

    pub fn idle(&self) -> ActionId {
        self.idle
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Iterate actions in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &ActionDefinition)> {
        self.actions
            .iter()
            .enumerate()
            .map(|(index, action)| (ActionId(index), action))
    }
}
