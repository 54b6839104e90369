use crate::board::{Board, Coord};
use crate::cells::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall state of a game. Anything other than `InProgress` is terminal and
/// never changes again.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    InProgress,
    XWins,
    OWins,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn won_by(side: Side) -> Self {
        match side {
            Side::X => GameStatus::XWins,
            Side::O => GameStatus::OWins,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::XWins => Some(Side::X),
            GameStatus::OWins => Some(Side::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::InProgress => "IN_PROGRESS",
            GameStatus::XWins => "X_WINS",
            GameStatus::OWins => "O_WINS",
            GameStatus::Draw => "DRAW",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Game outcome from the human player's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerStatus {
    InProgress,
    Won,
    Lost,
    Draw,
}

impl PlayerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerStatus::InProgress => "IN_PROGRESS",
            PlayerStatus::Won => "WON",
            PlayerStatus::Lost => "LOST",
            PlayerStatus::Draw => "DRAW",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single game between the human and the computer.
///
/// Fields are only written by [`crate::engine::apply_move`]; everything else
/// sees the game through the accessors below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) next_move: Option<Side>,
    pub(crate) status: GameStatus,
    /// Side controlled by the human, fixed at creation
    pub(crate) human_side: Side,
    /// Positions played so far, oldest first
    pub(crate) moves: Vec<Coord>,
}

impl Game {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side due to move; `None` exactly when the game is over.
    pub fn next_move(&self) -> Option<Side> {
        self.next_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn human_side(&self) -> Side {
        self.human_side
    }

    pub fn computer_side(&self) -> Side {
        self.human_side.opponent()
    }

    pub fn human_goes_first(&self) -> bool {
        self.human_side == Side::X
    }

    pub fn is_human_turn(&self) -> bool {
        self.next_move == Some(self.human_side)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.next_move == Some(self.computer_side())
    }

    pub fn moves(&self) -> &[Coord] {
        &self.moves
    }

    pub fn player_status(&self) -> PlayerStatus {
        match self.status {
            GameStatus::InProgress => PlayerStatus::InProgress,
            GameStatus::Draw => PlayerStatus::Draw,
            GameStatus::XWins | GameStatus::OWins => {
                if self.status.winner() == Some(self.human_side) {
                    PlayerStatus::Won
                } else {
                    PlayerStatus::Lost
                }
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.rows(),
            status: self.status,
            next_move: self.next_move,
            human_side: self.human_side,
            human_goes_first: self.human_goes_first(),
            player_status: self.player_status(),
        }
    }
}

/// Serializable view of a game for whatever renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Three rows of `"x"`, `"o"` or `""`
    pub board: Vec<Vec<String>>,
    pub status: GameStatus,
    pub next_move: Option<Side>,
    pub human_side: Side,
    pub human_goes_first: bool,
    pub player_status: PlayerStatus,
}
