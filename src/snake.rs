use std::collections::VecDeque;

use crate::{Coords, GridInt};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Maps one line of player input to a direction. Only `w`, `a`, `s` and `d`
    /// are recognized, in either case; only the line terminator is stripped.
    pub fn from_input(line: &str) -> Option<Self> {
        match line.trim_end_matches(&['\r', '\n'][..]) {
            "w" | "W" => Some(Up),
            "a" | "A" => Some(Left),
            "s" | "S" => Some(Down),
            "d" | "D" => Some(Right),
            _ => None,
        }
    }

    /// Unit (row, col) offset
    pub fn offset(self) -> (GridInt, GridInt) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

/// Head is the front of `body`, tail the back.
pub struct Snake {
    body: VecDeque<Coords>,
}

impl Snake {
    pub fn new(pos: Coords) -> Self {
        Snake { body: VecDeque::from(vec![pos]) }
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Advances one cell. Returns true if the new head landed on `food`, in
    /// which case the tail is kept and the snake is one segment longer.
    pub fn move_step(&mut self, direction: Direction, food: Coords) -> bool {
        let (row, col) = self.head();
        let (d_row, d_col) = direction.offset();
        let new_head = (row + d_row, col + d_col);

        self.body.push_front(new_head);

        if new_head == food {
            true
        } else {
            self.body.pop_back();
            false
        }
    }

    /// Border rows and columns are walls; the interior is rows 1..=height-2 and
    /// columns 1..=width-2.
    pub fn check_collision(&self, width: GridInt, height: GridInt) -> bool {
        let head @ (row, col) = self.head();

        if row <= 0 || row >= height - 1 || col <= 0 || col >= width - 1 {
            return true;
        }

        self.body.iter().skip(1).any(|pos| *pos == head)
    }

    #[cfg(test)]
    pub fn from_segments(segments: &[Coords]) -> Self {
        Snake { body: segments.iter().copied().collect() }
    }
}
