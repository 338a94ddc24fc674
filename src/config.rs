//! Startup parameters

use clap::Parser;

use crate::error::{Error, Result};
use crate::GridInt;

pub const DEFAULT_WIDTH: GridInt = 20;
pub const DEFAULT_HEIGHT: GridInt = 10;

/// Smallest side length that leaves room for food next to the starting snake
pub const MIN_SIDE: GridInt = 4;

/// Largest side length accepted, keeps the frame buffer small
pub const MAX_SIDE: GridInt = 500;

/// CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "snake")]
#[command(version)]
#[command(about = "Snake in the terminal, one move per line of input", long_about = None)]
pub struct CliArgs {
    /// Grid width in cells, walls included
    #[arg(long, value_name = "COLS", default_value_t = DEFAULT_WIDTH)]
    pub width: GridInt,

    /// Grid height in cells, walls included
    #[arg(long, value_name = "ROWS", default_value_t = DEFAULT_HEIGHT)]
    pub height: GridInt,

    /// Seed for food placement, for a repeatable game
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub width: GridInt,
    pub height: GridInt,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, seed: None }
    }
}

impl Config {
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let config = Self { width: args.width, height: args.height, seed: args.seed };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_SIDE || self.height < MIN_SIDE {
            return Err(Error::InvalidConfig(format!(
                "grid must be at least {min}x{min}, got {}x{}",
                self.width,
                self.height,
                min = MIN_SIDE
            )));
        }
        if self.width > MAX_SIDE || self.height > MAX_SIDE {
            return Err(Error::InvalidConfig(format!(
                "grid must be at most {max}x{max}, got {}x{}",
                self.width,
                self.height,
                max = MAX_SIDE
            )));
        }
        Ok(())
    }
}
