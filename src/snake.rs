use std::collections::VecDeque;
use std::ops::Add;
use std::time::Duration;

use Direction::*;

/// A grid cell, addressed as (row, col).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, dir: Direction) -> Position {
        let (dr, dc) = dir.delta();
        Position::new(self.row + dr, self.col + dc)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Up | Down)
    }
}

/// Terminal cells are roughly twice as tall as they are wide, so vertical
/// steps get a longer tick to keep the on-screen speed even.
const VERTICAL_NUM: u32 = 3;
const VERTICAL_DEN: u32 = 2;

pub struct Snake {
    // Ordered tail (front) to head (back).
    body: VecDeque<Position>,
    direction: Direction,
    grow_next_move: bool,
    base_interval: Duration,
    interval: Duration,
}

impl Snake {
    /// A single-segment snake heading right.
    pub fn new(pos: Position, base_interval: Duration) -> Self {
        let mut body = VecDeque::new();
        body.push_back(pos);

        Snake {
            body,
            direction: Right,
            grow_next_move: false,
            base_interval,
            interval: base_interval,
        }
    }

    pub fn head(&self) -> Position {
        *self.body.back().expect("snake body is never empty")
    }

    pub fn tail(&self) -> Position {
        *self.body.front().expect("snake body is never empty")
    }

    /// Segments from tail to head.
    pub fn body(&self) -> impl DoubleEndedIterator<Item = &Position> + ExactSizeIterator {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Delay to wait after the current step.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Where the head lands on the next `move_step`.
    pub fn next_head(&self) -> Position {
        self.head() + self.direction
    }

    pub fn set_direction(&mut self, new_direction: Direction) {
        if new_direction == self.direction.opposite() {
            return;
        }

        self.direction = new_direction;
        self.interval = if new_direction.is_vertical() {
            self.base_interval * VERTICAL_NUM / VERTICAL_DEN
        } else {
            self.base_interval
        };
    }

    /// Keeps the tail in place on the next move. Calling it again before
    /// that move has no further effect.
    pub fn grow(&mut self) {
        self.grow_next_move = true;
    }

    pub fn move_step(&mut self) -> Position {
        let new_head = self.next_head();
        self.body.push_back(new_head);

        if self.grow_next_move {
            self.grow_next_move = false;
        } else {
            self.body.pop_front();
        }

        new_head
    }
}
