use std::io::{Stdout, Write, stdout};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::ClearType;

use crate::error::Result;
use crate::render::Frame;

/// Everything the game needs from a display. Platform-specific clearing lives
/// behind this trait, away from the game logic.
pub trait Screen {
    /// Clears the display and draws the frame from the top left corner.
    fn draw(&mut self, frame: &Frame) -> Result<()>;

    /// Writes `text` without a line break and flushes, ready for input.
    fn prompt(&mut self, text: &str) -> Result<()>;

    /// Writes one full line.
    fn message(&mut self, text: &str) -> Result<()>;
}

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}

impl Screen for TermManager {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.clear()?;

        for row in &frame.rows {
            queue!(self.stdout, style::Print(row), style::Print("\n"))?;
        }
        queue!(self.stdout, style::Print(&frame.status), style::Print("\n"))?;

        self.flush()
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        queue!(self.stdout, style::Print(text))?;
        self.flush()
    }

    fn message(&mut self, text: &str) -> Result<()> {
        queue!(self.stdout, style::Print(text), style::Print("\n"))?;
        self.flush()
    }
}
