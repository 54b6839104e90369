use crate::game::GameStatus;
use thiserror::Error;

/// The two classes of contract violation surfaced by the core.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Occupied cell, out-of-range coordinate or a move on a finished game.
    InvalidMove,
    /// The opponent was asked to move when no move is possible.
    InvalidState,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move: tile ({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },
    #[error("Invalid move: tile ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("Invalid move: game is already over ({status})")]
    GameOver { status: GameStatus },
    #[error("Invalid state: no side is due to move")]
    NoSideToMove,
    #[error("Invalid state: no empty tiles remain")]
    NoEmptyTiles,
    #[error("Invalid state: {0}")]
    InvalidBoard(String),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::OutOfRange { .. }
            | GameError::CellOccupied { .. }
            | GameError::GameOver { .. } => ErrorKind::InvalidMove,
            GameError::NoSideToMove | GameError::NoEmptyTiles | GameError::InvalidBoard(_) => {
                ErrorKind::InvalidState
            }
        }
    }

    pub fn is_invalid_move(&self) -> bool {
        self.kind() == ErrorKind::InvalidMove
    }
}
