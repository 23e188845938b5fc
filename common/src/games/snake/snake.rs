use std::collections::VecDeque;

use super::types::{Direction, FieldSize, Point};

pub const INITIAL_SNAKE_LENGTH: usize = 3;

#[derive(Clone, Debug)]
pub struct Snake {
    /// Head at the front.
    pub body: VecDeque<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    /// Builds a straight snake whose body trails behind `start_pos`.
    pub fn new(start_pos: Point, direction: Direction) -> Self {
        let (dx, dy) = direction.opposite().offset();
        let body = (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|i| start_pos.offset_by(dx * i, dy * i))
            .collect();

        Self {
            body,
            direction,
            pending_direction: None,
        }
    }

    /// Reversals are ignored. Later calls before the next `advance` overwrite earlier ones.
    pub fn set_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    pub fn advance(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let next_head = self.head().moved(self.direction);
        self.body.push_front(next_head);
        self.body.pop_back();
    }

    /// Duplicates the tail `amount` times; the copies unfold over the next moves.
    pub fn grow(&mut self, amount: u32) {
        let tail = self.tail();
        for _ in 0..amount {
            self.body.push_back(tail);
        }
    }

    pub fn wrap_head(&mut self, field_size: &FieldSize) {
        if let Some(head) = self.body.front_mut() {
            *head = field_size.wrap(*head);
        }
    }

    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
