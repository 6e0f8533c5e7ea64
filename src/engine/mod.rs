// Engine modules: assets, input, collision, map and render interfaces

pub mod assets;
pub mod game_loop;
pub mod input;
pub mod map;
pub mod physics;
pub mod renderer;
