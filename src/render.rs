use crate::apple::Apple;
use crate::grid::Walls;
use crate::scores::ScoreEntry;
use crate::snake::{Position, Snake};

const SNAKE_BODY_CHAR: char = 'O';
const SNAKE_HEAD_CHAR: char = 'X';
const APPLE_CHAR: char = '*';

pub const ROASTS: &[&str] = &[
    "That's why she left you with a paragraph and a blocked number.",
    "The wall wasn't the problem. It was you, like always.",
    "Your snake isn't the only thing that's short and disappointing.",
    "Even your reflection avoids eye contact.",
];

/// A character grid for one full screen. Writes outside of it are dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas { width, height, cells: vec![' '; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    pub fn put(&mut self, pos: Position, ch: char) {
        if pos.row < 0 || pos.col < 0 {
            return;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = ch;
        }
    }

    pub fn put_str(&mut self, row: usize, col: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.put(Position::new(row as i32, (col + i) as i32), ch);
        }
    }

    pub fn put_centered(&mut self, row: usize, text: &str) {
        let len = text.chars().count();
        let col = self.width.saturating_sub(len) / 2;
        self.put_str(row, col, text);
    }

    pub fn draw_walls(&mut self, walls: &Walls) {
        let (h, w) = (walls.height(), walls.width());
        for pos in walls.iter() {
            let corner = (pos.row == 0 || pos.row == h - 1) && (pos.col == 0 || pos.col == w - 1);
            let ch = if corner {
                '+'
            } else if pos.row == 0 || pos.row == h - 1 {
                '-'
            } else {
                '|'
            };
            self.put(*pos, ch);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.cells.chunks(self.width.max(1)).map(|row| row.iter().collect()).collect()
    }
}

fn blank_board(walls: &Walls) -> Canvas {
    // One extra row below the board for the score line
    let mut canvas = Canvas::new(walls.width() as usize, walls.height() as usize + 1);
    canvas.draw_walls(walls);
    canvas
}

pub fn game_screen(snake: &Snake, apple: &Apple, walls: &Walls) -> Canvas {
    let mut canvas = blank_board(walls);

    canvas.put(apple.position(), APPLE_CHAR);
    for pos in snake.body() {
        canvas.put(*pos, SNAKE_BODY_CHAR);
    }
    canvas.put(snake.head(), SNAKE_HEAD_CHAR);

    let score_row = walls.height() as usize;
    canvas.put_centered(score_row, &format!("Score: {}", snake.len()));
    canvas
}

pub fn start_screen(walls: &Walls) -> Canvas {
    let mut canvas = blank_board(walls);
    let mid = walls.height() as usize / 2;

    canvas.put_centered(mid.saturating_sub(2), "-- Welcome to Snake --");
    canvas.put_centered(mid, "Choose your difficulty:");
    canvas.put_centered(mid + 1, "[1] Easy   [2] Medium   [3] Hard");
    canvas.put_centered(mid + 3, "Press 1, 2, or 3 to begin, or ESC to exit");
    canvas
}

pub fn game_over_screen(
    walls: &Walls,
    score: u32,
    won: bool,
    scores: &[ScoreEntry],
    roast: Option<&str>,
) -> Canvas {
    let mut canvas = blank_board(walls);
    let mid = walls.height() as usize / 2;

    canvas.put_centered(2, "-- High Scores --");
    for (i, entry) in scores.iter().enumerate() {
        canvas.put_centered(4 + i, &entry.to_line(i + 1));
    }

    let heading = if won { "You won!" } else { "Game Over" };
    canvas.put_centered(mid, heading);
    canvas.put_centered(mid + 1, &format!("Your score was {}", score));
    canvas.put_centered(mid + 3, "Press Enter to play again, or ESC to exit");

    if let Some(roast) = roast {
        // Bottom-aligned on the third row from the bottom, inside the walls
        let rows = wrap_words(roast, (walls.width() as usize).saturating_sub(2));
        let last_row = (walls.height() as usize).saturating_sub(3);
        let first_row = (last_row + 1).saturating_sub(rows.len());
        for (i, line) in rows.iter().enumerate() {
            canvas.put_centered(first_row + i, line);
        }
    }
    canvas
}

/// Greedy word wrap. A single word longer than `width` keeps its own row.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut rows = vec![];
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
