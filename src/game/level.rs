// One playable level: the character, the walls and the per-tick order

use super::characters::{CharacterController, ControllerState, Resolution};
use crate::engine::input::KeySource;
use crate::engine::map::{LoadedMap, RenderLayer};
use crate::engine::physics::WallSet;
use crate::engine::renderer::RenderBackend;
use log::{debug, info, trace};

/// A loaded map with one controllable character in it
#[derive(Debug)]
pub struct Level {
    controller: CharacterController,
    walls: WallSet,
    layers: Vec<RenderLayer>,
    tick_count: u64,
    last_state: ControllerState,
}

impl Level {
    pub fn new(controller: CharacterController, map: LoadedMap) -> Self {
        log_map(&map);
        let last_state = controller.controller_state();
        Self {
            controller,
            walls: map.walls,
            layers: map.layers,
            tick_count: 0,
            last_state,
        }
    }

    /// Run one simulation tick: input, movement, animation, then drawing
    pub fn tick<K, R>(&mut self, keys: &K, backend: &mut R) -> Resolution
    where
        K: KeySource + ?Sized,
        R: RenderBackend + ?Sized,
    {
        let resolution = self.controller.resolve(keys, &self.walls);
        if resolution.displacement != resolution.delta {
            trace!(
                "Movement {:?} clamped to {:?}",
                resolution.delta,
                resolution.displacement
            );
        }
        if resolution.state != self.last_state {
            self.log_transition(resolution.state);
        }

        self.controller.advance();
        // Blocking actions end inside `advance`
        self.last_state = self.controller.controller_state();

        backend.center(self.controller.hitbox().midbottom());
        backend.draw(&self.controller.current_frame(), self.controller.sprite_rect());

        self.tick_count += 1;
        trace!("tick {}: {:?}", self.tick_count, self.controller.state());
        resolution
    }

    fn log_transition(&self, state: ControllerState) {
        let name = self.controller.current_action_name();
        match state {
            ControllerState::Idle => debug!("Idle"),
            ControllerState::Moving(action) => debug!("Moving: '{}' ({:?})", name, action),
            ControllerState::Locked(action, mode) => {
                debug!("Locked in '{}' ({:?}, {:?})", name, action, mode)
            }
        }
    }

    /// Swap in a new map. Only possible between ticks.
    pub fn replace_map(&mut self, map: LoadedMap) {
        info!(
            "Replacing map: {} walls -> {} walls",
            self.walls.len(),
            map.walls.len()
        );
        log_map(&map);
        self.walls = map.walls;
        self.layers = map.layers;
    }

    pub fn controller(&self) -> &CharacterController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CharacterController {
        &mut self.controller
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub fn layers(&self) -> &[RenderLayer] {
        &self.layers
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

fn log_map(map: &LoadedMap) {
    if map.walls.is_empty() {
        info!("Map has no walls; movement is unrestricted");
    }
    for layer in &map.layers {
        debug!("Render layer '{}'", layer.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rect;
    use crate::engine::input::InputBinding;
    use crate::engine::renderer::HeadlessRenderer;
    use crate::game::characters::definition::ActionDefinition;
    use crate::game::characters::state::LockMode;
    use crate::game::characters::{ActionTable, AnimationSet, ControllerConfig};
    use glam::IVec2;
    use image::RgbaImage;
    use std::collections::HashSet;
    use winit::keyboard::KeyCode;

    fn level(walls: Vec<Rect>) -> Level {
        let table = ActionTable::new(vec![
            ActionDefinition::looping("idle", 2, 0.5),
            ActionDefinition::looping("run", 2, 0.5),
            ActionDefinition::once("jump", 2, 1.0),
        ])
        .unwrap();
        let animations = AnimationSet::from_sheets(table, |_| Ok(RgbaImage::new(80, 40)));
        let config = ControllerConfig::new(vec![
            InputBinding::new(KeyCode::Space, "jump"),
            InputBinding::new(KeyCode::KeyD, "run")
                .with_delta(4, 0)
                .with_flip(false),
            InputBinding::new(KeyCode::KeyA, "run")
                .with_delta(-4, 0)
                .with_flip(true),
        ]);
        let controller = CharacterController::new(animations, &config, IVec2::new(0, 0)).unwrap();

        Level::new(
            controller,
            LoadedMap {
                walls: WallSet::new(walls),
                layers: Vec::new(),
            },
        )
    }

    fn keys(pressed: &[KeyCode]) -> HashSet<KeyCode> {
        pressed.iter().copied().collect()
    }

    #[test]
    fn test_tick_moves_and_draws() {
        let mut level = level(Vec::new());
        let mut renderer = HeadlessRenderer::new(320.0, 240.0);

        let res = level.tick(&keys(&[KeyCode::KeyA]), &mut renderer);
        assert_eq!(res.displacement, IVec2::new(-4, 0));
        assert_eq!(level.tick_count(), 1);

        let drawn = renderer.last_draw().unwrap();
        assert_eq!(drawn.sprite, level.controller().sprite_rect());
        assert!(drawn.flipped);
        assert!(drawn.on_screen);
    }

    #[test]
    fn test_camera_follows_feet() {
        let mut level = level(Vec::new());
        let mut renderer = HeadlessRenderer::new(100.0, 100.0);

        for _ in 0..10 {
            level.tick(&keys(&[KeyCode::KeyD]), &mut renderer);
        }
        let feet = level.controller().hitbox().midbottom();
        assert_eq!(renderer.camera().position, feet.as_vec2());
    }

    #[test]
    fn test_blocking_action_then_idle() {
        let mut level = level(Vec::new());
        let mut renderer = HeadlessRenderer::new(100.0, 100.0);

        let res = level.tick(&keys(&[KeyCode::Space]), &mut renderer);
        assert!(matches!(res.state, ControllerState::Locked(_, LockMode::Once)));

        // 2 frames at 1.0 per tick: the tick that started it showed frame 1,
        // the next one overflows back to idle
        let res = level.tick(&keys(&[KeyCode::KeyD]), &mut renderer);
        assert_eq!(res.delta, IVec2::ZERO);
        assert_eq!(level.controller().controller_state(), ControllerState::Idle);

        let res = level.tick(&keys(&[KeyCode::KeyD]), &mut renderer);
        assert_eq!(res.delta, IVec2::new(4, 0));
    }

    #[test]
    fn test_trigger_between_ticks_blocks_input() {
        let mut level = level(Vec::new());
        let mut renderer = HeadlessRenderer::new(100.0, 100.0);

        let jump = level.controller().action_id("jump").unwrap();
        assert!(level.controller_mut().trigger(jump));

        let res = level.tick(&keys(&[KeyCode::KeyD]), &mut renderer);
        assert_eq!(res.delta, IVec2::ZERO);
        assert!(matches!(res.state, ControllerState::Locked(action, _) if action == jump));
    }

    #[test]
    fn test_replace_map_between_ticks() {
        let mut level = level(Vec::new());
        let mut renderer = HeadlessRenderer::new(100.0, 100.0);
        level.tick(&keys(&[KeyCode::KeyD]), &mut renderer);

        // Put a wall one pixel ahead of the hitbox
        let right = level.controller().hitbox().right();
        level.replace_map(LoadedMap {
            walls: WallSet::new(vec![Rect::new(right + 1, -100, 10, 200)]),
            layers: vec![RenderLayer {
                name: "ground".to_string(),
            }],
        });
        assert_eq!(level.layers().len(), 1);

        let res = level.tick(&keys(&[KeyCode::KeyD]), &mut renderer);
        assert_eq!(res.displacement, IVec2::new(1, 0));
        assert_eq!(level.controller().hitbox().right(), right + 1);
        assert_eq!(level.walls().len(), 1);
    }
}
