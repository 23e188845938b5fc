mod difficulty;
mod food;
mod game;
mod game_state;
mod obstacle;
mod power_up;
mod session;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use difficulty::{Difficulty, DifficultyPreset};
pub use food::Food;
pub use game::{CommandRejected, GameCommand, GameState, SnakeGame};
pub use game_state::{RoundState, TickEvent, TickReport};
pub use obstacle::{Obstacle, generate_obstacles, obstacle_cells};
pub use power_up::{PowerUpSpec, PowerUpType, select_power_up, select_power_up_for_roll};
pub use session::{GameOverSummary, SnakeSession, SnakeSessionState};
pub use settings::SnakeSessionSettings;
pub use snake::{INITIAL_SNAKE_LENGTH, Snake};
pub use snapshot::{ActiveEffects, RoundSnapshot, Snapshot};
pub use types::{DeathReason, Direction, FieldSize, Point, WallCollisionMode};
