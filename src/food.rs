use rand::Rng;

use crate::snake::Snake;
use crate::{Coords, GridInt};

/// Picks a random interior cell not covered by the snake.
///
/// Sampling is retried until a free cell is hit, with no upper bound. That is
/// quick while the snake is short, but gets slower as the snake fills the
/// board and never returns once no interior cell is left free.
pub fn spawn_food<R: Rng>(snake: &Snake, width: GridInt, height: GridInt, rng: &mut R) -> Coords {
    let mut attempts: u64 = 0;

    loop {
        attempts += 1;
        let pos = (rng.gen_range(1..=height - 2), rng.gen_range(1..=width - 2));

        if !snake.body().contains(&pos) {
            log::debug!("Food placed at {:?} after {} attempt(s)", pos, attempts);
            return pos;
        }
    }
}
