// Game modules: the playable character and the level it moves in

pub mod characters;
pub mod level;

pub use level::Level;
