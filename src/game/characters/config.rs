// Controller configuration and startup validation errors

use super::stats::{BodyStats, BASE_BODY};
use crate::engine::input::{default_bindings, InputBinding};

/// Configuration errors, raised at startup and never during play
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Action defined twice: {0}")]
    DuplicateAction(String),

    #[error("Action {0} has no frames")]
    NoFrames(String),

    #[error("Action {action} has invalid frame duration {duration}")]
    InvalidFrameDuration { action: String, duration: f32 },

    #[error("Combo action {0} needs at least one repeat")]
    NoComboRepeats(String),

    #[error("No idle action defined")]
    MissingIdle,

    #[error("The idle action must loop")]
    IdleNotLooping,

    #[error("Key {key} is bound to unknown action {action}")]
    UnknownAction { key: String, action: String },
}

/// Everything a controller needs besides its animations.
///
/// Built once at startup and handed to each character, so two characters can
/// run with different bindings side by side.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Key bindings in scan order
    pub bindings: Vec<InputBinding>,
    pub body: BodyStats,
}

impl ControllerConfig {
    pub fn new(bindings: Vec<InputBinding>) -> Self {
        Self {
            bindings,
            body: BASE_BODY,
        }
    }

    /// Default bindings and body proportions
    pub fn standard() -> Self {
        Self::new(default_bindings())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnknownAction {
            key: "KeyX".to_string(),
            action: "dash".to_string(),
        };
        assert_eq!(err.to_string(), "Key KeyX is bound to unknown action dash");
    }

    #[test]
    fn test_standard_config() {
        let config = ControllerConfig::standard();
        assert!(!config.bindings.is_empty());
        assert_eq!(config.body.hitbox_height, BASE_BODY.hitbox_height);
    }

    #[test]
    fn test_custom_body() {
        let body = BodyStats {
            hitbox_height: 8,
            hitbox_width_divisor: 2,
        };
        let config = ControllerConfig {
            body,
            ..ControllerConfig::new(vec![InputBinding::new(KeyCode::KeyX, "idle")])
        };
        assert_eq!(config.body.hitbox_height, 8);
        assert_eq!(config.bindings.len(), 1);
    }
}
