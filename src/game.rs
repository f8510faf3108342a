use std::time::Duration;

use anyhow::Result;
use log::{error, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::{Difficulty, GameConfig};
use crate::grid::Walls;
use crate::input::Key;
use crate::render::{self, Canvas, ROASTS};
use crate::scores::ScoreStore;
use crate::session::{Session, TickResult};

/// Everything the game needs from the outside world.
pub trait Frontend {
    fn present(&mut self, canvas: &Canvas) -> Result<()>;

    /// Waits for the next recognized key.
    fn read_key(&mut self) -> Result<Key>;

    /// Returns at most one pending key without waiting.
    fn poll_key(&mut self) -> Result<Option<Key>>;

    fn sleep(&mut self, delay: Duration);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    StartMenu,
    Playing(Difficulty),
    GameOver { score: u32, won: bool },
    Exit,
}

pub struct SnakeGame<F: Frontend, R: Rng> {
    config: GameConfig,
    front: F,
    scores: ScoreStore,
    rng: R,
    walls: Walls,
}

impl<F: Frontend, R: Rng> SnakeGame<F, R> {
    pub fn new(config: GameConfig, front: F, rng: R) -> Self {
        let scores = ScoreStore::new(config.score_path.clone());
        let walls = Walls::new(config.height, config.width);
        SnakeGame { config, front, scores, rng, walls }
    }

    #[cfg(test)]
    pub fn front(&self) -> &F {
        &self.front
    }

    pub fn front_mut(&mut self) -> &mut F {
        &mut self.front
    }

    /// Runs menus and games until the player quits.
    pub fn run(&mut self) -> Result<()> {
        let mut state = State::StartMenu;

        loop {
            state = match state {
                State::StartMenu => self.start_menu()?,
                State::Playing(difficulty) => self.play(difficulty)?,
                State::GameOver { score, won } => self.game_over(score, won)?,
                State::Exit => break,
            };
        }

        Ok(())
    }

    fn start_menu(&mut self) -> Result<State> {
        self.front.present(&render::start_screen(&self.walls))?;

        loop {
            match self.front.read_key()? {
                Key::Escape => return Ok(State::Exit),
                Key::Digit(d) => {
                    if let Some(difficulty) = Difficulty::from_digit(d) {
                        info!("starting a game on {:?}", difficulty);
                        return Ok(State::Playing(difficulty));
                    }
                }
                _ => {}
            }
        }
    }

    fn play(&mut self, difficulty: Difficulty) -> Result<State> {
        let rng = StdRng::seed_from_u64(self.rng.gen());
        let mut session = Session::new(&self.config, difficulty, rng);

        loop {
            self.present_session(&session)?;

            let turn = match self.front.poll_key()? {
                Some(Key::Escape) => {
                    info!("game abandoned with score {}", session.score());
                    return Ok(State::Exit);
                }
                Some(key) => key.direction(),
                None => None,
            };

            match session.tick(turn) {
                TickResult::Continue { delay } => self.front.sleep(delay),
                TickResult::Crashed => {
                    self.present_session(&session)?;
                    let snake = session.snake();
                    info!(
                        "crashed at {:?} (tail {:?}) with score {}",
                        snake.head(),
                        snake.tail(),
                        session.score()
                    );
                    return Ok(State::GameOver { score: session.score(), won: false });
                }
                TickResult::BoardFull => {
                    self.present_session(&session)?;
                    info!("board full with score {}", session.score());
                    return Ok(State::GameOver { score: session.score(), won: true });
                }
            }
        }
    }

    fn present_session<G: Rng>(&mut self, session: &Session<G>) -> Result<()> {
        let frame = render::game_screen(session.snake(), session.apple(), session.walls());
        self.front.present(&frame)
    }

    fn game_over(&mut self, score: u32, won: bool) -> Result<State> {
        let scores = match self.scores.save(score) {
            Ok(scores) => scores,
            Err(e) => {
                error!("could not save score to {}: {:#}", self.scores.path().display(), e);
                self.scores.load().unwrap_or_default()
            }
        };

        let roast = if self.config.roast {
            ROASTS.choose(&mut self.rng).copied()
        } else {
            None
        };

        let screen = render::game_over_screen(&self.walls, score, won, &scores, roast);
        self.front.present(&screen)?;

        loop {
            match self.front.read_key()? {
                Key::Confirm => return Ok(State::StartMenu),
                Key::Escape => return Ok(State::Exit),
                _ => {}
            }
        }
    }
}
