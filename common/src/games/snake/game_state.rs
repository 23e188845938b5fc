use std::time::Duration;

use crate::games::RandomSource;
use crate::log;
use super::difficulty::Difficulty;
use super::food::Food;
use super::obstacle::{Obstacle, generate_obstacles, obstacle_cells};
use super::power_up::PowerUpType;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::types::{DeathReason, Direction, FieldSize, Point, WallCollisionMode};

const MIN_TICK_INTERVAL_MS: u64 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    Moved,
    Ate { power_up: PowerUpType, points: u32 },
    Died(DeathReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Interval the scheduler should use, computed before the move.
    pub interval: Duration,
    pub event: TickEvent,
}

/// Everything owned by a single round. Expiry fields are epoch milliseconds, 0 when unset.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub snake: Snake,
    pub food: Food,
    pub obstacles: Vec<Obstacle>,
    pub field_size: FieldSize,
    pub wall_collision_mode: WallCollisionMode,
    pub difficulty: Difficulty,
    pub tick_interval: Duration,
    pub score: u32,
    pub speed_boost_until: u64,
    pub double_points_until: u64,
    pub invincibility_until: u64,
    pub tick: u64,
    pub death_reason: Option<DeathReason>,
}

impl RoundState {
    pub fn new(settings: &SnakeSessionSettings, rng: &mut impl RandomSource) -> Self {
        let field_size = settings.field_size;
        let preset = settings.difficulty.preset();

        let start_pos = Point::new(field_size.width / 2, field_size.height / 2);
        let snake = Snake::new(start_pos, Direction::Right);
        let food = Food::spawn(&field_size, &snake, &Default::default(), 0, rng);
        let obstacles = generate_obstacles(
            preset.obstacle_count,
            &field_size,
            &snake,
            food.position,
            rng,
        );

        log!(
            "Round started: difficulty {}, {:?}, {} obstacle cells",
            settings.difficulty,
            settings.wall_collision_mode,
            obstacle_cells(&obstacles).len()
        );

        Self::with_parts(snake, food, obstacles, settings)
    }

    pub fn with_parts(
        snake: Snake,
        food: Food,
        obstacles: Vec<Obstacle>,
        settings: &SnakeSessionSettings,
    ) -> Self {
        Self {
            snake,
            food,
            obstacles,
            field_size: settings.field_size,
            wall_collision_mode: settings.wall_collision_mode,
            difficulty: settings.difficulty,
            tick_interval: settings.difficulty.preset().tick_interval,
            score: 0,
            speed_boost_until: 0,
            double_points_until: 0,
            invincibility_until: 0,
            tick: 0,
            death_reason: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.death_reason.is_none()
    }

    pub fn effective_interval(&self, now: u64) -> Duration {
        if now < self.speed_boost_until {
            let halved_ms = self.tick_interval.as_millis() as u64 / 2;
            Duration::from_millis(halved_ms.max(MIN_TICK_INTERVAL_MS))
        } else {
            self.tick_interval
        }
    }

    pub fn is_invincible(&self, now: u64) -> bool {
        now < self.invincibility_until
    }

    pub fn is_double_points(&self, now: u64) -> bool {
        now < self.double_points_until
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    pub fn update(&mut self, now: u64, rng: &mut impl RandomSource) -> TickReport {
        let interval = self.effective_interval(now);

        if let Some(reason) = self.death_reason {
            return TickReport {
                interval,
                event: TickEvent::Died(reason),
            };
        }

        self.snake.advance();
        self.tick += 1;

        if let Some(reason) = self.detect_collision(now) {
            self.death_reason = Some(reason);
            log!("Snake died: {:?}, final score {}", reason, self.score);
            return TickReport {
                interval,
                event: TickEvent::Died(reason),
            };
        }

        let event = if self.snake.head() == self.food.position {
            self.consume_food(now, rng)
        } else {
            TickEvent::Moved
        };

        TickReport { interval, event }
    }

    fn detect_collision(&mut self, now: u64) -> Option<DeathReason> {
        if self.wall_collision_mode == WallCollisionMode::WrapAround {
            self.snake.wrap_head(&self.field_size);
        }

        if self.is_invincible(now) {
            return None;
        }

        let head = self.snake.head();
        if self.wall_collision_mode == WallCollisionMode::Death && !self.field_size.contains(head) {
            return Some(DeathReason::WallCollision);
        }
        if self.obstacles.iter().any(|obstacle| obstacle.contains(head)) {
            return Some(DeathReason::ObstacleCollision);
        }
        if self.snake.collides_with_self() {
            return Some(DeathReason::SelfCollision);
        }

        None
    }

    fn consume_food(&mut self, now: u64, rng: &mut impl RandomSource) -> TickEvent {
        let power_up = self.food.power_up;
        let spec = power_up.spec();

        let mut points = spec.base_points;
        if self.is_double_points(now) {
            points *= 2;
        }
        self.score += points;
        self.snake.grow(spec.grow_amount);

        if let Some(duration) = spec.duration {
            let until = now + duration.as_millis() as u64;
            match power_up {
                PowerUpType::SpeedBoost => self.speed_boost_until = until,
                PowerUpType::DoublePoints => self.double_points_until = until,
                PowerUpType::Invincibility => self.invincibility_until = until,
                _ => {}
            }
        }

        log!(
            "Ate {:?} at ({}, {}) for {} points. Score: {}",
            power_up,
            self.food.position.x,
            self.food.position.y,
            points,
            self.score
        );

        let cells = obstacle_cells(&self.obstacles);
        self.food = Food::spawn(&self.field_size, &self.snake, &cells, self.score, rng);

        TickEvent::Ate { power_up, points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;

    const NOW: u64 = 1_000_000;

    fn settings(difficulty: Difficulty, mode: WallCollisionMode) -> SnakeSessionSettings {
        SnakeSessionSettings {
            field_size: FieldSize::new(30, 25),
            difficulty,
            wall_collision_mode: mode,
        }
    }

    fn create_round(mode: WallCollisionMode, obstacles: Vec<Obstacle>) -> RoundState {
        let snake = Snake::new(Point::new(15, 12), Direction::Right);
        let food = Food::new(Point::new(0, 0), PowerUpType::Food);
        RoundState::with_parts(snake, food, obstacles, &settings(Difficulty::Easy, mode))
    }

    fn place_food_ahead(round: &mut RoundState, power_up: PowerUpType) {
        let ahead = round.snake.head().moved(round.snake.direction);
        round.food = Food::new(ahead, power_up);
    }

    #[test]
    fn test_new_round() {
        let mut rng = SessionRng::new(42);
        let round = RoundState::new(&settings(Difficulty::Extreme, WallCollisionMode::Death), &mut rng);

        assert_eq!(round.snake.len(), 3);
        assert_eq!(round.snake.head(), Point::new(15, 12));
        assert_eq!(round.score, 0);
        assert_eq!(round.tick_interval, Duration::from_millis(45));
        assert!(round.obstacles.len() <= 10);
        assert!(!round.snake.contains(round.food.position));
        for cell in obstacle_cells(&round.obstacles) {
            assert!(!round.snake.contains(cell));
            assert_ne!(cell, round.food.position);
        }
    }

    #[test]
    fn test_wall_collision_at_right_edge() {
        let mut rng = SessionRng::new(42);
        let mut round = create_round(WallCollisionMode::Death, vec![]);

        for _ in 0..14 {
            let report = round.update(NOW, &mut rng);
            assert_eq!(report.event, TickEvent::Moved);
        }
        assert_eq!(round.snake.head().x, 29);

        let report = round.update(NOW, &mut rng);
        assert_eq!(report.event, TickEvent::Died(DeathReason::WallCollision));
        assert_eq!(round.snake.head().x, 30);
        assert!(!round.is_alive());
    }

    #[test]
    fn test_dead_round_does_not_move() {
        let mut rng = SessionRng::new(42);
        let mut round = create_round(WallCollisionMode::Death, vec![]);
        round.death_reason = Some(DeathReason::SelfCollision);
        let head = round.snake.head();

        let report = round.update(NOW, &mut rng);
        assert_eq!(report.event, TickEvent::Died(DeathReason::SelfCollision));
        assert_eq!(round.snake.head(), head);
        assert_eq!(round.tick, 0);
    }

    #[test]
    fn test_wrap_around_mode() {
        let mut rng = SessionRng::new(42);
        let mut round = create_round(WallCollisionMode::WrapAround, vec![]);

        for _ in 0..15 {
            assert_eq!(round.update(NOW, &mut rng).event, TickEvent::Moved);
        }
        assert_eq!(round.snake.head(), Point::new(0, 12));
    }

    #[test]
    fn test_obstacle_collision() {
        let mut rng = SessionRng::new(42);
        let obstacle = Obstacle::new(vec![Point::new(17, 12)]);
        let mut round = create_round(WallCollisionMode::Death, vec![obstacle]);

        assert_eq!(round.update(NOW, &mut rng).event, TickEvent::Moved);
        assert_eq!(
            round.update(NOW, &mut rng).event,
            TickEvent::Died(DeathReason::ObstacleCollision)
        );
    }

    #[test]
    fn test_self_collision_in_loop() {
        let mut rng = SessionRng::new(42);
        let mut round = create_round(WallCollisionMode::Death, vec![]);
        round.snake.grow(2);

        assert_eq!(round.update(NOW, &mut rng).event, TickEvent::Moved);
        round.set_direction(Direction::Down);
        assert_eq!(round.update(NOW, &mut rng).event, TickEvent::Moved);
        round.set_direction(Direction::Left);
        assert_eq!(round.update(NOW, &mut rng).event, TickEvent::Moved);
        round.set_direction(Direction::Up);
        assert_eq!(
            round.update(NOW, &mut rng).event,
            TickEvent::Died(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn test_invincibility_suppresses_collisions() {
        let mut rng = SessionRng::new(42);
        let obstacle = Obstacle::new(vec![Point::new(16, 12)]);
        let mut round = create_round(WallCollisionMode::Death, vec![obstacle]);
        round.invincibility_until = NOW + 10_000;

        for _ in 0..20 {
            assert_eq!(round.update(NOW, &mut rng).event, TickEvent::Moved);
        }
        assert_eq!(round.snake.head(), Point::new(35, 12));

        let report = round.update(NOW + 10_000, &mut rng);
        assert_eq!(report.event, TickEvent::Died(DeathReason::WallCollision));
    }

    #[test]
    fn test_invincibility_suppresses_self_collision() {
        let mut rng = SessionRng::new(42);
        let mut round = create_round(WallCollisionMode::Death, vec![]);
        round.snake.grow(2);
        round.invincibility_until = NOW + 10_000;

        round.update(NOW, &mut rng);
        round.set_direction(Direction::Down);
        round.update(NOW, &mut rng);
        round.set_direction(Direction::Left);
        round.update(NOW, &mut rng);
        round.set_direction(Direction::Up);

        assert_eq!(round.update(NOW, &mut rng).event, TickEvent::Moved);
        assert!(round.snake.collides_with_self());
        assert!(round.is_alive());
    }

    #[test]
    fn test_eating_food_scores_and_grows() {
        let mut rng = SessionRng::new(42);
        let mut round = create_round(WallCollisionMode::Death, vec![]);
        place_food_ahead(&mut round, PowerUpType::Food);
        let eaten_at = round.food.position;

        let report = round.update(NOW, &mut rng);
        assert_eq!(
            report.event,
            TickEvent::Ate { power_up: PowerUpType::Food, points: 100 }
        );
        assert_eq!(round.score, 100);
        assert_eq!(round.snake.len(), 4);
        assert_ne!(round.food.position, eaten_at);
        assert!(!round.snake.contains(round.food.position));
    }

    #[test]
    fn test_grow_power_up_adds_three_segments() {
        let mut rng = SessionRng::new(42);
        let mut round = create_round(WallCollisionMode::WrapAround, vec![]);
        place_food_ahead(&mut round, PowerUpType::Grow);

        round.update(NOW, &mut rng);
        assert_eq!(round.score, 150);
        assert_eq!(round.snake.len(), 6);
    }

    #[test]
    fn test_double_points() {
        let mut rng = SessionRng::new(42);
        let mut round = create_round(WallCollisionMode::WrapAround, vec![]);
        place_food_ahead(&mut round, PowerUpType::DoublePoints);

        round.update(NOW, &mut rng);
        assert_eq!(round.score, 75);
        assert_eq!(round.double_points_until, NOW + 8000);

        place_food_ahead(&mut round, PowerUpType::Golden);
        let report = round.update(NOW + 100, &mut rng);
        assert_eq!(
            report.event,
            TickEvent::Ate { power_up: PowerUpType::Golden, points: 400 }
        );
        assert_eq!(round.score, 475);

        place_food_ahead(&mut round, PowerUpType::Food);
        round.update(NOW + 8000, &mut rng);
        assert_eq!(round.score, 575);
    }

    #[test]
    fn test_timed_effect_is_overwritten() {
        let mut rng = SessionRng::new(42);
        let mut round = create_round(WallCollisionMode::WrapAround, vec![]);

        place_food_ahead(&mut round, PowerUpType::Invincibility);
        round.update(NOW, &mut rng);
        assert_eq!(round.invincibility_until, NOW + 6000);

        place_food_ahead(&mut round, PowerUpType::Invincibility);
        round.update(NOW + 1000, &mut rng);
        assert_eq!(round.invincibility_until, NOW + 7000);
    }

    #[test]
    fn test_speed_boost_halves_interval() {
        let mut rng = SessionRng::new(42);
        let snake = Snake::new(Point::new(15, 12), Direction::Right);
        let food = Food::new(Point::new(16, 12), PowerUpType::SpeedBoost);
        let mut round = RoundState::with_parts(
            snake,
            food,
            vec![],
            &settings(Difficulty::Medium, WallCollisionMode::WrapAround),
        );

        let report = round.update(NOW, &mut rng);
        assert_eq!(report.interval, Duration::from_millis(90));
        assert_eq!(round.speed_boost_until, NOW + 5000);

        let report = round.update(NOW + 10, &mut rng);
        assert_eq!(report.interval, Duration::from_millis(45));
        assert_eq!(round.effective_interval(NOW + 4999), Duration::from_millis(45));
        assert_eq!(round.effective_interval(NOW + 5000), Duration::from_millis(90));
    }

    #[test]
    fn test_speed_boost_rounds_down_to_whole_millis() {
        let snake = Snake::new(Point::new(15, 12), Direction::Right);
        let food = Food::new(Point::new(0, 0), PowerUpType::Food);
        let mut round = RoundState::with_parts(
            snake,
            food,
            vec![],
            &settings(Difficulty::Hard, WallCollisionMode::Death),
        );
        assert_eq!(round.effective_interval(NOW), Duration::from_millis(65));

        round.speed_boost_until = NOW + 1;
        assert_eq!(round.effective_interval(NOW), Duration::from_millis(32));
    }

    #[test]
    fn test_speed_boost_floor() {
        let snake = Snake::new(Point::new(15, 12), Direction::Right);
        let food = Food::new(Point::new(0, 0), PowerUpType::Food);
        let mut round = RoundState::with_parts(
            snake,
            food,
            vec![],
            &settings(Difficulty::Extreme, WallCollisionMode::Death),
        );
        round.speed_boost_until = NOW + 1;
        assert_eq!(round.effective_interval(NOW), Duration::from_millis(30));
    }
}
