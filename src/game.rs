use std::io::BufRead;

use rand::Rng;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::food::spawn_food;
use crate::render::render;
use crate::snake::{Snake, Direction::{self, *}};
use crate::term::Screen;
use crate::{Coords, GridInt};

const PROMPT: &str = "Move (WASD): ";
const GAME_OVER_MSG: &str = "Game Over!";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver,
}

pub struct GameState {
    snake: Snake,
    food: Coords,
    direction: Direction,
    score: u32,
    width: GridInt,
    height: GridInt,
}

impl GameState {
    /// One-segment snake in the middle of the grid, heading right.
    pub fn new<G: Rng>(width: GridInt, height: GridInt, rng: &mut G) -> Self {
        let snake = Snake::new((height / 2, width / 2));
        let food = spawn_food(&snake, width, height, rng);
        GameState { snake, food, direction: Right, score: 0, width, height }
    }

    /// Applies the player's choice (if any), moves, and checks for a crash.
    pub fn step<G: Rng>(&mut self, input: Option<Direction>, rng: &mut G) -> Status {
        if let Some(dir) = input {
            self.direction = dir;
        }

        if self.snake.move_step(self.direction, self.food) {
            self.score += 1;
            self.food = spawn_food(&self.snake, self.width, self.height, rng);
        }

        log::debug!("Moved {:?}, head at {:?}, length {}", self.direction, self.snake.head(), self.snake.len());

        if self.snake.check_collision(self.width, self.height) {
            Status::GameOver
        } else {
            Status::Running
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

pub struct SnakeGame<S, R, G> {
    state: GameState,
    screen: S,
    input: R,
    rng: G,
}

impl<S: Screen, R: BufRead, G: Rng> SnakeGame<S, R, G> {
    pub fn new(config: &Config, screen: S, input: R, mut rng: G) -> Self {
        let state = GameState::new(config.width, config.height, &mut rng);
        SnakeGame { state, screen, input, rng }
    }

    /// Runs until the snake crashes and returns the final score.
    pub fn play(&mut self) -> Result<u32> {
        loop {
            self.draw()?;

            let dir = self.read_move()?;

            if self.state.step(dir, &mut self.rng) == Status::GameOver {
                self.screen.message(GAME_OVER_MSG)?;
                log::info!("Game over, final score {}", self.state.score());
                return Ok(self.state.score());
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw(&mut self) -> Result<()> {
        let state = &self.state;
        let frame = render(&state.snake, state.direction, state.food, state.score, state.width, state.height);
        self.screen.draw(&frame)
    }

    fn read_move(&mut self) -> Result<Option<Direction>> {
        self.screen.prompt(PROMPT)?;

        // Raw bytes, so a line that is not UTF-8 is just an unknown move
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        Ok(Direction::from_input(&String::from_utf8_lossy(&line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Frame;
    use rand::{rngs::StdRng, SeedableRng};
    use std::io::Cursor;

    #[derive(Default)]
    struct RecordingScreen {
        frames: Vec<Frame>,
        prompts: usize,
        messages: Vec<String>,
    }

    impl Screen for &mut RecordingScreen {
        fn draw(&mut self, frame: &Frame) -> Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }

        fn prompt(&mut self, _text: &str) -> Result<()> {
            self.prompts += 1;
            Ok(())
        }

        fn message(&mut self, text: &str) -> Result<()> {
            self.messages.push(text.to_string());
            Ok(())
        }
    }

    fn state_with(snake: Snake, food: Coords, direction: Direction) -> GameState {
        GameState { snake, food, direction, score: 0, width: 20, height: 10 }
    }

    #[test]
    fn starts_in_the_middle_heading_right() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = GameState::new(20, 10, &mut rng);

        assert_eq!(state.snake.body().iter().copied().collect::<Vec<_>>(), vec![(5, 10)]);
        assert_eq!(state.direction, Right);
        assert_eq!(state.score, 0);
        assert_ne!(state.food, (5, 10));
    }

    #[test]
    fn eating_scores_and_moves_the_food() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = state_with(Snake::new((5, 10)), (5, 11), Right);

        assert_eq!(state.step(None, &mut rng), Status::Running);
        assert_eq!(state.snake.head(), (5, 11));
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.score, 1);
        assert!(!state.snake.body().contains(&state.food));
        let (row, col) = state.food;
        assert!((1..=8).contains(&row) && (1..=18).contains(&col));
    }

    #[test]
    fn input_changes_direction_and_none_keeps_it() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = state_with(Snake::new((5, 10)), (1, 1), Right);

        state.step(Some(Down), &mut rng);
        assert_eq!(state.snake.head(), (6, 10));
        state.step(None, &mut rng);
        assert_eq!(state.snake.head(), (7, 10));
        assert_eq!(state.direction, Down);
    }

    #[test]
    fn hitting_the_top_wall_ends_the_game() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = state_with(Snake::new((1, 4)), (8, 8), Up);

        assert_eq!(state.step(None, &mut rng), Status::GameOver);
        assert_eq!(state.snake.head(), (0, 4));
    }

    #[test]
    fn play_reads_moves_until_crash() {
        let mut screen = RecordingScreen::default();
        let config = Config::default();
        // Five moves up from row 5 reach the wall at row 0
        let input = Cursor::new("w\nhello\n\nW\nw\n");
        let rng = StdRng::seed_from_u64(11);

        let mut game = SnakeGame::new(&config, &mut screen, input, rng);
        game.state.food = (8, 1);
        let score = game.play().unwrap();

        drop(game);
        assert_eq!(score, 0);
        assert_eq!(screen.frames.len(), 5);
        assert_eq!(screen.prompts, 5);
        assert_eq!(screen.messages, vec!["Game Over!"]);
        assert_eq!(screen.frames[0].status, "Score: 0");
        assert_eq!(screen.frames[0].rows[5].chars().nth(10), Some('>'));
        assert_eq!(screen.frames[4].rows[1].chars().nth(10), Some('^'));
    }

    #[test]
    fn garbage_bytes_keep_the_direction() {
        let mut screen = RecordingScreen::default();
        let input = Cursor::new(&b"\xff\xfe\nw\nw\nw\nw\nw\n"[..]);
        let rng = StdRng::seed_from_u64(11);

        let mut game = SnakeGame::new(&Config::default(), &mut screen, input, rng);
        game.state.food = (8, 1);
        let score = game.play().unwrap();

        drop(game);
        assert_eq!(score, 0);
        assert_eq!(screen.messages, vec!["Game Over!"]);
        // The bad line moved right, then five moves up from row 5 hit the wall
        assert_eq!(screen.frames.len(), 6);
        assert_eq!(screen.frames[1].rows[5].chars().nth(11), Some('>'));
        assert_eq!(screen.frames[5].rows[1].chars().nth(11), Some('^'));
    }

    #[test]
    fn closed_input_is_fatal() {
        let mut screen = RecordingScreen::default();
        let rng = StdRng::seed_from_u64(11);

        let mut game = SnakeGame::new(&Config::default(), &mut screen, Cursor::new("d\n"), rng);
        game.state.food = (8, 1);

        assert!(matches!(game.play(), Err(Error::InputClosed)));
    }
}
