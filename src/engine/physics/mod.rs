// Collision against static level geometry

mod collision;

pub use collision::{move_and_collide, WallSet};
