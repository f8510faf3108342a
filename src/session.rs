use std::time::Duration;

use log::debug;
use rand::Rng;

use crate::apple::Apple;
use crate::collision::check_game_over;
use crate::config::{Difficulty, GameConfig};
use crate::grid::Walls;
use crate::snake::{Direction, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickResult {
    /// Keep playing after waiting `delay`.
    Continue { delay: Duration },
    Crashed,
    /// No free cell is left for another apple.
    BoardFull,
}

/// State of one game, from the first tick until the snake dies.
pub struct Session<R: Rng> {
    snake: Snake,
    apple: Apple,
    walls: Walls,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(config: &GameConfig, difficulty: Difficulty, rng: R) -> Self {
        Session {
            snake: Snake::new(config.snake_start(), difficulty.base_interval()),
            apple: Apple::at(config.apple_start()),
            walls: Walls::new(config.height, config.width),
            rng,
        }
    }

    #[cfg(test)]
    pub fn from_parts(snake: Snake, apple: Apple, walls: Walls, rng: R) -> Self {
        Session { snake, apple, walls, rng }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    pub fn score(&self) -> u32 {
        self.snake.len() as u32
    }

    /// Applies the turn, eats, moves and checks for the end of the game.
    /// Eating the apple that leaves no free cell ends the game before moving.
    pub fn tick(&mut self, turn: Option<Direction>) -> TickResult {
        if let Some(dir) = turn {
            self.snake.set_direction(dir);
        }

        if self.snake.head() == self.apple.position() {
            self.snake.grow();
            match Apple::spawn(&mut self.rng, &self.walls, &self.snake) {
                Some(apple) => {
                    debug!("apple eaten, next one at {:?}", apple.position());
                    self.apple = apple;
                }
                None => return TickResult::BoardFull,
            }
        }

        self.snake.move_step();

        if check_game_over(&self.snake, &self.walls) {
            return TickResult::Crashed;
        }

        // Linger a little longer before a fatal step into the wall
        let mut delay = self.snake.interval();
        if self.walls.contains(self.snake.next_head()) {
            delay *= 2;
        }

        TickResult::Continue { delay }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::{Direction::*, Position};
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn session_at(head: Position, apple: Position) -> Session<StdRng> {
        let snake = Snake::new(head, Duration::from_millis(100));
        Session::from_parts(snake, Apple::at(apple), Walls::new(21, 50), rng())
    }

    #[test]
    fn fresh_session() {
        let session = Session::new(&GameConfig::default(), Difficulty::Medium, rng());
        assert_eq!(session.snake().head(), Position::new(10, 10));
        assert_eq!(session.snake().len(), 1);
        assert_eq!(session.snake().direction(), Right);
        assert_eq!(session.apple().position(), Position::new(10, 35));
        assert_eq!(session.walls().width(), 50);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn plain_ticks() {
        let mut session = Session::new(&GameConfig::default(), Difficulty::Medium, rng());
        for _ in 0..3 {
            let res = session.tick(None);
            assert_eq!(res, TickResult::Continue { delay: Duration::from_millis(100) });
        }
        assert_eq!(session.snake().head(), Position::new(10, 13));
        assert_eq!(session.snake().len(), 1);
    }

    #[test]
    fn vertical_ticks_are_longer() {
        let mut session = Session::new(&GameConfig::default(), Difficulty::Easy, rng());
        let res = session.tick(Some(Up));
        assert_eq!(res, TickResult::Continue { delay: Duration::from_millis(300) });
        assert_eq!(session.snake().head(), Position::new(9, 10));
    }

    #[test]
    fn eating_grows_on_the_following_move() {
        let mut session = session_at(Position::new(5, 5), Position::new(5, 6));

        // Reach the apple
        session.tick(None);
        assert_eq!(session.snake().head(), Position::new(5, 6));
        assert_eq!(session.snake().len(), 1);

        // Eat it: growth applies on this move, the tail stays behind
        session.tick(None);
        assert_eq!(session.snake().len(), 2);
        assert_eq!(session.snake().tail(), Position::new(5, 6));
        assert_eq!(session.snake().head(), Position::new(5, 7));

        let apple = session.apple().position();
        assert_ne!(apple, Position::new(5, 6));
        assert!(!session.snake().contains(apple));
        assert!(session.walls().is_interior(apple));
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn crash_into_wall_after_a_long_pause() {
        let mut session = session_at(Position::new(10, 47), Position::new(1, 1));

        let res = session.tick(None);
        assert_eq!(res, TickResult::Continue { delay: Duration::from_millis(200) });

        assert_eq!(session.tick(None), TickResult::Crashed);
        assert_eq!(session.snake().head(), Position::new(10, 49));
    }

    #[test]
    fn reversal_is_ignored_mid_game() {
        let mut session = session_at(Position::new(10, 10), Position::new(1, 1));
        session.tick(Some(Left));
        assert_eq!(session.snake().head(), Position::new(10, 11));
    }

    #[test]
    fn filling_the_board_ends_the_game() {
        // Interior is one row of two cells
        let snake = Snake::new(Position::new(1, 1), Duration::from_millis(100));
        let mut session = Session::from_parts(
            snake,
            Apple::at(Position::new(1, 1)),
            Walls::new(3, 4),
            rng(),
        );

        // The head is on the apple, the only other cell becomes the new one
        assert!(matches!(session.tick(None), TickResult::Continue { .. }));
        assert_eq!(session.apple().position(), Position::new(1, 2));

        // Now eating leaves no room for another apple, the snake stays put
        assert_eq!(session.snake().len(), 2);
        assert_eq!(session.tick(None), TickResult::BoardFull);
        assert_eq!(session.snake().head(), Position::new(1, 2));
    }
}
