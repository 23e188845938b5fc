use std::time::Duration;

use super::difficulty::Difficulty;
use super::food::Food;
use super::game::GameState;
use super::game_state::RoundState;
use super::types::{DeathReason, FieldSize, Point, WallCollisionMode};

/// Remaining time of each timed effect, `None` when inactive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveEffects {
    pub speed_boost: Option<Duration>,
    pub double_points: Option<Duration>,
    pub invincibility: Option<Duration>,
}

impl ActiveEffects {
    fn remaining(until: u64, now: u64) -> Option<Duration> {
        (now < until).then(|| Duration::from_millis(until - now))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoundSnapshot {
    pub tick: u64,
    pub body: Vec<Point>,
    pub food: Food,
    pub obstacles: Vec<Vec<Point>>,
    pub score: u32,
    pub interval: Duration,
    pub effects: ActiveEffects,
    pub death_reason: Option<DeathReason>,
}

impl RoundSnapshot {
    pub fn capture(round: &RoundState, now: u64) -> Self {
        Self {
            tick: round.tick,
            body: round.snake.body.iter().copied().collect(),
            food: round.food,
            obstacles: round
                .obstacles
                .iter()
                .map(|obstacle| obstacle.cells.clone())
                .collect(),
            score: round.score,
            interval: round.effective_interval(now),
            effects: ActiveEffects {
                speed_boost: ActiveEffects::remaining(round.speed_boost_until, now),
                double_points: ActiveEffects::remaining(round.double_points_until, now),
                invincibility: ActiveEffects::remaining(round.invincibility_until, now),
            },
            death_reason: round.death_reason,
        }
    }
}

/// Read-only view handed to renderers after every tick or command.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub state: GameState,
    pub field_size: FieldSize,
    pub difficulty: Difficulty,
    pub wall_collision_mode: WallCollisionMode,
    pub round: Option<RoundSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::power_up::PowerUpType;
    use crate::games::snake::settings::SnakeSessionSettings;
    use crate::games::snake::snake::Snake;
    use crate::games::snake::types::Direction;

    #[test]
    fn test_capture_effects() {
        let snake = Snake::new(Point::new(5, 5), Direction::Right);
        let food = Food::new(Point::new(1, 1), PowerUpType::Golden);
        let mut round = RoundState::with_parts(snake, food, vec![], &SnakeSessionSettings::default());
        round.speed_boost_until = 1_500;
        round.invincibility_until = 900;
        round.score = 300;

        let snapshot = RoundSnapshot::capture(&round, 1_000);
        assert_eq!(snapshot.effects.speed_boost, Some(Duration::from_millis(500)));
        assert_eq!(snapshot.effects.double_points, None);
        assert_eq!(snapshot.effects.invincibility, None);
        assert_eq!(snapshot.interval, Duration::from_millis(45));
        assert_eq!(snapshot.body.len(), 3);
        assert_eq!(snapshot.food.power_up, PowerUpType::Golden);
        assert_eq!(snapshot.score, 300);
    }
}
