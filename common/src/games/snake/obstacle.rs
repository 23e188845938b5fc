use std::collections::HashSet;

use crate::games::RandomSource;
use super::food::random_point;
use super::snake::Snake;
use super::types::{FieldSize, Point};

const MAX_START_ATTEMPTS: usize = 500;
const MAX_BLOCK_SIZE: i32 = 3;

/// A block of cells placed once per round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Obstacle {
    pub cells: Vec<Point>,
}

impl Obstacle {
    pub fn new(cells: Vec<Point>) -> Self {
        Self { cells }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.cells.contains(&point)
    }
}

/// Best-effort placement of up to `count` blocks. Blocks whose cells were
/// all rejected are dropped, so fewer than `count` may come back.
pub fn generate_obstacles(
    count: usize,
    field_size: &FieldSize,
    snake: &Snake,
    food_pos: Point,
    rng: &mut impl RandomSource,
) -> Vec<Obstacle> {
    let mut obstacles: Vec<Obstacle> = Vec::with_capacity(count);

    for _ in 0..count {
        let start = find_start(field_size, snake, food_pos, &obstacles, rng);
        let block_size = 1 + rng.next_index(MAX_BLOCK_SIZE);

        let mut cells = Vec::with_capacity(block_size as usize);
        for _ in 0..block_size {
            let dx = rng.next_index(3) - 1;
            let dy = rng.next_index(3) - 1;
            let cell = start.offset_by(dx, dy);
            if field_size.contains(cell) && !snake.contains(cell) && cell != food_pos {
                cells.push(cell);
            }
        }

        if !cells.is_empty() {
            obstacles.push(Obstacle::new(cells));
        }
    }

    obstacles
}

pub fn obstacle_cells(obstacles: &[Obstacle]) -> HashSet<Point> {
    obstacles
        .iter()
        .flat_map(|obstacle| obstacle.cells.iter().copied())
        .collect()
}

fn find_start(
    field_size: &FieldSize,
    snake: &Snake,
    food_pos: Point,
    placed: &[Obstacle],
    rng: &mut impl RandomSource,
) -> Point {
    let mut start = random_point(field_size, rng);
    for _ in 1..MAX_START_ATTEMPTS {
        let occupied = snake.contains(start)
            || start == food_pos
            || placed.iter().any(|obstacle| obstacle.contains(start));
        if !occupied {
            break;
        }
        start = random_point(field_size, rng);
    }
    start
}
