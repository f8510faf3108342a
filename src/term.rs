use std::io::{stdout, Stdout, Write};
use std::thread::sleep;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{poll, read, Event};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

use crate::game::Frontend;
use crate::input::{map_key, Key};
use crate::render::Canvas;

/// Crossterm-backed screen and keyboard. Only cells that changed since the
/// last frame are redrawn.
pub struct TermManager {
    stdout: Stdout,
    screen: Canvas,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), screen: Canvas::new(0, 0) }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("entering alternate screen")?;
        terminal::enable_raw_mode().context("enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking).context("hiding cursor")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("disabling raw mode")?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("leaving alternate screen")?;
        Ok(())
    }

    fn clear(&mut self, width: usize, height: usize) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All)).context("clearing screen")?;
        self.screen = Canvas::new(width, height);
        Ok(())
    }
}

impl Frontend for TermManager {
    fn present(&mut self, canvas: &Canvas) -> Result<()> {
        if canvas.width() != self.screen.width() || canvas.height() != self.screen.height() {
            self.clear(canvas.width(), canvas.height())?;
        }

        for row in 0..canvas.height() {
            for col in 0..canvas.width() {
                let ch = canvas.get(row, col);
                if ch != self.screen.get(row, col) {
                    if let Some(ch) = ch {
                        queue!(self.stdout, cursor::MoveTo(col as u16, row as u16), style::Print(ch))?;
                    }
                }
            }
        }

        self.screen = canvas.clone();
        self.stdout.flush().context("flushing stdout")?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        loop {
            if let Event::Key(ev) = read()? {
                if let Some(key) = map_key(&ev) {
                    return Ok(key);
                }
            }
        }
    }

    fn poll_key(&mut self) -> Result<Option<Key>> {
        if !poll(Duration::from_millis(0))? {
            return Ok(None);
        }

        match read()? {
            Event::Key(ev) => Ok(map_key(&ev)),
            _ => Ok(None),
        }
    }

    fn sleep(&mut self, delay: Duration) {
        sleep(delay);
    }
}
