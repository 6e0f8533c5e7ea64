// Character system
//
// This module contains everything related to the playable character:
// - Action definitions and the validated action table
// - Animation set built from sprite sheets
// - Controller configuration and body proportions
// - State machine data and the controller that drives it

pub mod animation;
pub mod character;
pub mod config;
pub mod definition;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::AnimationSet;
pub use character::{CharacterController, Resolution};
pub use config::ControllerConfig;
pub use definition::ActionTable;
pub use state::ControllerState;
