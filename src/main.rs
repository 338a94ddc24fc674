mod config;
mod error;
mod food;
mod game;
mod render;
mod snake;
mod term;

use std::io::stdin;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};

use config::{CliArgs, Config};
use error::Result;

pub type GridInt = i16;
/// (row, col)
pub type Coords = (GridInt, GridInt);

fn main() -> ExitCode {
    // Logs go to stderr, the board owns stdout
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();
    let config = Config::from_args(&args)?;
    log::debug!("Starting with {:?}", config);

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = stdin();
    let mut game = game::SnakeGame::new(&config, term::TermManager::new(), stdin.lock(), rng);
    let score = game.play()?;

    info!("Exiting with score {}", score);
    Ok(())
}
