// Character controller: input -> action state -> movement -> animation

use super::animation::AnimationSet;
use super::config::{ConfigError, ControllerConfig};
use super::definition::{ActionId, PlaybackMode};
use super::state::{CharacterState, ControllerState};
use crate::core::Rect;
use crate::engine::input::{FlipOverride, KeySource};
use crate::engine::physics::{move_and_collide, WallSet};
use crate::engine::renderer::FrameView;
use glam::IVec2;
use log::debug;
use winit::keyboard::KeyCode;

/// A key binding with its action resolved against the animation set
#[derive(Debug, Clone, Copy)]
struct BoundKey {
    key: KeyCode,
    action: ActionId,
    delta: IVec2,
    flip: FlipOverride,
}

/// Outcome of one `resolve` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// State after input was applied
    pub state: ControllerState,
    /// Movement requested by the held keys
    pub delta: IVec2,
    /// How far the hitbox actually moved after collision
    pub displacement: IVec2,
}

/// The player character.
///
/// Call `resolve`, then `advance`, then read `current_frame`/`sprite_rect`,
/// once per tick and in that order.
#[derive(Debug)]
pub struct CharacterController {
    animations: AnimationSet,
    bindings: Vec<BoundKey>,
    state: CharacterState,
    /// Sprite size, fixed at spawn from the first idle frame
    sprite_size: IVec2,
}

impl CharacterController {
    /// Spawn a character with its sprite's top-left corner at `spawn`.
    ///
    /// Fails if a binding names an action the animation set doesn't define.
    pub fn new(
        animations: AnimationSet,
        config: &ControllerConfig,
        spawn: IVec2,
    ) -> Result<Self, ConfigError> {
        let bindings = config
            .bindings
            .iter()
            .map(|binding| {
                let action = animations.table().id(&binding.action).ok_or_else(|| {
                    ConfigError::UnknownAction {
                        key: format!("{:?}", binding.key),
                        action: binding.action.clone(),
                    }
                })?;
                Ok::<_, ConfigError>(BoundKey {
                    key: binding.key,
                    action,
                    delta: binding.delta,
                    flip: binding.flip,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        let idle = animations.table().idle();
        let idle_frame = animations.frame(idle, 0);
        let sprite_size = IVec2::new(idle_frame.width() as i32, idle_frame.height() as i32);
        let sprite = Rect::new(spawn.x, spawn.y, sprite_size.x, sprite_size.y);
        let hitbox = config.body.hitbox_for(&sprite);

        debug!(
            "Spawned character at {:?} (sprite {:?}, hitbox {:?})",
            spawn, sprite, hitbox
        );

        Ok(Self {
            animations,
            bindings,
            state: CharacterState::spawn(idle, hitbox),
            sprite_size,
        })
    }

    /// Apply this tick's held keys and move against `walls`.
    ///
    /// While a blocking action plays, input is ignored and nothing moves.
    /// Otherwise bindings are scanned in declaration order: a held blocking
    /// key starts its action, drops any movement gathered so far and ends the
    /// scan; held movement keys add up their steps. With no bound key held the
    /// character returns to idle.
    pub fn resolve<K: KeySource + ?Sized>(&mut self, keys: &K, walls: &WallSet) -> Resolution {
        if self.state.is_busy {
            return Resolution {
                state: self.controller_state(),
                delta: IVec2::ZERO,
                displacement: IVec2::ZERO,
            };
        }

        let mut delta = IVec2::ZERO;
        let mut any_held = false;
        let mut switched = false;

        for binding in &self.bindings {
            if !keys.is_pressed(binding.key) {
                continue;
            }
            any_held = true;
            self.state.flipped = binding.flip.apply(self.state.flipped);

            let mode = self.animations.definition(binding.action).mode;
            if mode.is_blocking() {
                self.state.lock(binding.action, mode);
                delta = IVec2::ZERO;
                debug!(
                    "Started '{}' from {:?}",
                    self.animations.definition(binding.action).name,
                    binding.key
                );
                break;
            }

            delta += binding.delta;
            if !switched && binding.action != self.state.current_action {
                self.state.play(binding.action);
                switched = true;
            }
        }

        let idle = self.animations.table().idle();
        if !any_held && self.state.current_action != idle {
            self.state.play(idle);
        }

        let before = self.state.hitbox;
        self.state.hitbox = move_and_collide(before, delta, walls);
        let displacement = IVec2::new(
            self.state.hitbox.x - before.x,
            self.state.hitbox.y - before.y,
        );

        Resolution {
            state: self.controller_state(),
            delta,
            displacement,
        }
    }

    /// Advance the animation by one tick.
    ///
    /// The timer gains the action's frame duration; every whole unit moves one
    /// frame forward. Running past the last frame loops, replays a combo, or
    /// ends a blocking action and drops back to idle.
    pub fn advance(&mut self) {
        let idle = self.animations.table().idle();
        self.state.timer += self.animations.definition(self.state.current_action).frame_duration;

        while self.state.timer >= 1.0 {
            self.state.timer -= 1.0;
            self.state.frame_index += 1;

            let action = self.state.current_action;
            if self.state.frame_index < self.animations.frame_len(action) {
                continue;
            }

            match self.animations.definition(action).mode {
                PlaybackMode::Loop => self.state.frame_index = 0,
                PlaybackMode::Combo { .. } if self.state.repeat_counter > 0 => {
                    self.state.repeat_counter -= 1;
                    self.state.frame_index = 0;
                }
                PlaybackMode::Combo { .. } | PlaybackMode::Once => {
                    debug!("Finished '{}'", self.animations.definition(action).name);
                    self.state.release(idle);
                }
            }
        }
    }

    /// Start a blocking action from game logic (e.g. "death").
    ///
    /// Refused while another blocking action plays and for looping actions.
    pub fn trigger(&mut self, action: ActionId) -> bool {
        let mode = self.animations.definition(action).mode;
        if self.state.is_busy || !mode.is_blocking() {
            return false;
        }
        self.state.lock(action, mode);
        debug!("Triggered '{}'", self.animations.definition(action).name);
        true
    }

    /// Look up an action by name
    pub fn action_id(&self, name: &str) -> Option<ActionId> {
        self.animations.table().id(name)
    }

    /// The frame to show this tick, with its facing
    pub fn current_frame(&self) -> FrameView<'_> {
        FrameView::new(
            self.animations
                .frame(self.state.current_action, self.state.frame_index),
            self.state.flipped,
        )
    }

    /// Sprite rectangle, bottom-center aligned with the hitbox
    pub fn sprite_rect(&self) -> Rect {
        let mut sprite = Rect::new(0, 0, self.sprite_size.x, self.sprite_size.y);
        sprite.set_midbottom(self.state.hitbox.midbottom());
        sprite
    }

    pub fn controller_state(&self) -> ControllerState {
        let action = self.state.current_action;
        if self.state.is_busy {
            if let Some(lock) = self.animations.definition(action).mode.lock_mode() {
                return ControllerState::Locked(action, lock);
            }
        }
        if action == self.animations.table().idle() {
            ControllerState::Idle
        } else {
            ControllerState::Moving(action)
        }
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn hitbox(&self) -> Rect {
        self.state.hitbox
    }

    /// Name of the action being played
    pub fn current_action_name(&self) -> &str {
        &self.animations.definition(self.state.current_action).name
    }

}
