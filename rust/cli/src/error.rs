//! Error types for the CLI application.
//!
//! Command handlers return [`CliError`] and propagate with `?`; [`crate::run`]
//! turns any error into a message on stderr and exit code 2.

use crate::config::ConfigError;
use thiserror::Error;
use tictactoe_engine::errors::GameError;

#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, reading input)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An engine or opponent call failed outside normal move validation
    #[error("Game error: {0}")]
    Game(#[from] GameError),
}
