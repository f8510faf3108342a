use rand::Rng;

use crate::grid::Walls;
use crate::snake::{Position, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Apple {
    position: Position,
}

impl Apple {
    pub fn at(position: Position) -> Self {
        Apple { position }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Picks a random free interior cell. Returns `None` when the snake
    /// already covers the whole interior.
    pub fn spawn<R: Rng>(rng: &mut R, walls: &Walls, snake: &Snake) -> Option<Self> {
        let occupied = snake.body().filter(|pos| walls.is_interior(**pos)).count();
        if occupied >= walls.interior_size() {
            return None;
        }

        loop {
            let pos = Position::new(
                rng.gen_range(1..=walls.height() - 2),
                rng.gen_range(1..=walls.width() - 2),
            );
            if !snake.contains(pos) {
                return Some(Apple::at(pos));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction;
    use rand::{rngs::StdRng, SeedableRng};
    use std::time::Duration;

    #[test]
    fn spawns_inside_and_off_the_snake() {
        let walls = Walls::new(6, 6);
        let mut snake = Snake::new(Position::new(1, 1), Duration::from_millis(100));
        for _ in 0..3 {
            snake.grow();
            snake.move_step();
        }

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let apple = Apple::spawn(&mut rng, &walls, &snake).unwrap();
            assert!(walls.is_interior(apple.position()));
            assert!(!snake.contains(apple.position()));
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        // 3x4 board: the interior is a single row of two cells
        let walls = Walls::new(3, 4);
        let snake = Snake::new(Position::new(1, 1), Duration::from_millis(100));

        let mut rng = StdRng::seed_from_u64(1);
        let apple = Apple::spawn(&mut rng, &walls, &snake).unwrap();
        assert_eq!(apple.position(), Position::new(1, 2));
    }

    #[test]
    fn full_board_yields_none() {
        let walls = Walls::new(3, 4);
        let mut snake = Snake::new(Position::new(1, 1), Duration::from_millis(100));
        snake.set_direction(Direction::Right);
        snake.grow();
        snake.move_step();

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Apple::spawn(&mut rng, &walls, &snake), None);
    }
}
