use crate::config::SnakeConfig;
use super::difficulty::Difficulty;
use super::types::{FieldSize, WallCollisionMode};

/// Selections that a new round is derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnakeSessionSettings {
    pub field_size: FieldSize,
    pub difficulty: Difficulty,
    pub wall_collision_mode: WallCollisionMode,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            field_size: FieldSize::new(30, 25),
            difficulty: Difficulty::Medium,
            wall_collision_mode: WallCollisionMode::Death,
        }
    }
}

impl From<&SnakeConfig> for SnakeSessionSettings {
    fn from(config: &SnakeConfig) -> Self {
        Self {
            field_size: FieldSize::new(config.field_width as i32, config.field_height as i32),
            difficulty: config.difficulty,
            wall_collision_mode: config.wall_collision_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = SnakeConfig {
            field_width: 40,
            field_height: 20,
            difficulty: Difficulty::Hard,
            wall_collision_mode: WallCollisionMode::WrapAround,
            ..SnakeConfig::default()
        };
        let settings = SnakeSessionSettings::from(&config);
        assert_eq!(settings.field_size, FieldSize::new(40, 20));
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.wall_collision_mode, WallCollisionMode::WrapAround);
    }

    #[test]
    fn test_default_matches_config_default() {
        assert_eq!(
            SnakeSessionSettings::default(),
            SnakeSessionSettings::from(&SnakeConfig::default())
        );
    }
}
