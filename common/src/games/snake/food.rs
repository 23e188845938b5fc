use std::collections::HashSet;

use crate::games::RandomSource;
use super::power_up::{PowerUpType, select_power_up};
use super::snake::Snake;
use super::types::{FieldSize, Point};

const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Point,
    pub power_up: PowerUpType,
}

impl Food {
    pub fn new(position: Point, power_up: PowerUpType) -> Self {
        Self { position, power_up }
    }

    /// Draws a type for `score`, then a free cell. After the attempt budget
    /// runs out the last candidate is used even if occupied.
    pub fn spawn(
        field_size: &FieldSize,
        snake: &Snake,
        obstacle_cells: &HashSet<Point>,
        score: u32,
        rng: &mut impl RandomSource,
    ) -> Self {
        let power_up = select_power_up(score, rng);

        let mut position = random_point(field_size, rng);
        for _ in 1..MAX_PLACEMENT_ATTEMPTS {
            if !snake.contains(position) && !obstacle_cells.contains(&position) {
                break;
            }
            position = random_point(field_size, rng);
        }

        Self::new(position, power_up)
    }
}

pub(crate) fn random_point(field_size: &FieldSize, rng: &mut impl RandomSource) -> Point {
    let x = rng.next_index(field_size.width);
    let y = rng.next_index(field_size.height);
    Point::new(x, y)
}
