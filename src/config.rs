use std::path::PathBuf;
use std::time::Duration;

use crate::snake::Position;

pub const DATA_DIR: &str = ".snake_data";
pub const SCORE_FILE: &str = "highscores.txt";
pub const LOG_FILE: &str = "snake.log";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Tick interval for horizontal movement.
    pub fn base_interval(self) -> Duration {
        let ms = match self {
            Difficulty::Easy => 200,
            Difficulty::Medium => 100,
            Difficulty::Hard => 70,
        };
        Duration::from_millis(ms)
    }
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub height: i32,
    pub width: i32,
    /// Column of the single starting segment; the row is the board's middle.
    pub snake_col: i32,
    /// The first apple sits this many columns left of the right edge.
    pub apple_col_offset: i32,
    pub score_path: PathBuf,
    /// Show a taunt on the game over screen.
    pub roast: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: 21,
            width: 50,
            snake_col: 10,
            apple_col_offset: 15,
            score_path: PathBuf::from(DATA_DIR).join(SCORE_FILE),
            roast: false,
        }
    }
}

impl GameConfig {
    /// Picks up the options that can be set at launch.
    pub fn from_env() -> Self {
        let roast = std::env::var("SNAKE_ROAST")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        GameConfig { roast, ..GameConfig::default() }
    }

    pub fn snake_start(&self) -> Position {
        Position::new(self.height / 2, self.snake_col)
    }

    pub fn apple_start(&self) -> Position {
        Position::new(self.height / 2, self.width - self.apple_col_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let config = GameConfig::default();
        assert_eq!(config.snake_start(), Position::new(10, 10));
        assert_eq!(config.apple_start(), Position::new(10, 35));
        assert!(!config.roast);
    }

    #[test]
    fn difficulty_keys() {
        assert_eq!(Difficulty::from_digit(1), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_digit(3), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_digit(4), None);
        assert!(Difficulty::Easy.base_interval() > Difficulty::Medium.base_interval());
        assert!(Difficulty::Medium.base_interval() > Difficulty::Hard.base_interval());
    }
}
