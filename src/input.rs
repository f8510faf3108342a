use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

/// Key presses the game cares about.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Escape,
    Digit(u8),
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Maps a terminal key event, `None` for keys with no meaning in the game.
pub fn map_key(ev: &KeyEvent) -> Option<Key> {
    if is_ctrl_c(ev) {
        return Some(Key::Escape);
    }

    match ev.code {
        KeyCode::Up | KeyCode::Char('w') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') => Some(Key::Down),
        KeyCode::Left | KeyCode::Char('a') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Key::Right),
        KeyCode::Enter => Some(Key::Confirm),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(c) => c.to_digit(10).map(|d| Key::Digit(d as u8)),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
