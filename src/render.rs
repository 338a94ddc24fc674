use crate::snake::{Direction, Snake};
use crate::{Coords, GridInt};

const WALL_CHAR: char = '#';
const EMPTY_CHAR: char = ' ';
const FOOD_CHAR: char = 'O';
const SNAKE_BODY_CHAR: char = '*';

/// One full screen: the grid rows followed by a status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<String>,
    pub status: String,
}

pub fn render(snake: &Snake, direction: Direction, food: Coords, score: u32, width: GridInt, height: GridInt) -> Frame {
    let (w, h) = (width as usize, height as usize);
    let mut grid = vec![vec![EMPTY_CHAR; w]; h];

    for (y, row) in grid.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            if y == 0 || y == h - 1 || x == 0 || x == w - 1 {
                *cell = WALL_CHAR;
            }
        }
    }

    put(&mut grid, food, FOOD_CHAR);

    for (i, pos) in snake.body().iter().enumerate() {
        let ch = if i == 0 {direction.head_char()} else {SNAKE_BODY_CHAR};
        put(&mut grid, *pos, ch);
    }

    Frame {
        rows: grid.into_iter().map(|row| row.into_iter().collect()).collect(),
        status: format!("Score: {}", score),
    }
}

// Silently skips anything outside the grid
fn put(grid: &mut [Vec<char>], (row, col): Coords, ch: char) {
    if row < 0 || col < 0 {
        return;
    }

    if let Some(cell) = grid.get_mut(row as usize).and_then(|r| r.get_mut(col as usize)) {
        *cell = ch;
    }
}
