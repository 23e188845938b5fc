use serde::{Deserialize, Serialize};

use crate::games::snake::{Difficulty, WallCollisionMode};
use super::Validate;

pub const DEFAULT_HIGH_SCORE_FILE: &str = "snake_high_scores.yaml";
const MAX_PLAYER_NAME_LEN: usize = 32;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub difficulty: Difficulty,
    pub wall_collision_mode: WallCollisionMode,
    pub player_name: String,
    #[serde(default = "default_high_score_file")]
    pub high_score_file: String,
}

fn default_high_score_file() -> String {
    DEFAULT_HIGH_SCORE_FILE.to_string()
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        if !(10..=100).contains(&self.field_width) {
            return Err("field_width must be between 10 and 100".to_string());
        }
        if !(10..=100).contains(&self.field_height) {
            return Err("field_height must be between 10 and 100".to_string());
        }
        if self.player_name.trim().is_empty() {
            return Err("player_name must not be empty".to_string());
        }
        if self.player_name.chars().count() > MAX_PLAYER_NAME_LEN {
            return Err(format!(
                "player_name must not exceed {} characters",
                MAX_PLAYER_NAME_LEN
            ));
        }
        if self.high_score_file.trim().is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            field_width: 30,
            field_height: 25,
            difficulty: Difficulty::Medium,
            wall_collision_mode: WallCollisionMode::Death,
            player_name: "Player".to_string(),
            high_score_file: default_high_score_file(),
        }
    }
}
