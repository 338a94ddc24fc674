//! Error types for the game

use std::io;
use thiserror::Error;

/// Fatal errors. Collisions are not errors, they end the game normally.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error on stdin or stdout
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal could not be cleared or written to
    #[error("Terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),

    /// Standard input reached end of file while waiting for a move
    #[error("Input closed while waiting for a move")]
    InputClosed,

    /// Startup parameters rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for game operations
pub type Result<T> = std::result::Result<T, Error>;
