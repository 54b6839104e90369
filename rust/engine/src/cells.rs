use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two marks a player is assigned for the lifetime of a game.
/// X always moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    X,
    O,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::X, Side::O];

    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Lowercase mark string used in board snapshots.
    pub fn mark(self) -> &'static str {
        match self {
            Side::X => "x",
            Side::O => "o",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::X => write!(f, "X"),
            Side::O => write!(f, "O"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Side),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Marked(side) => Some(side),
        }
    }

    /// Snapshot string: `"x"`, `"o"` or `""` for an empty cell.
    pub fn as_str(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Marked(side) => side.mark(),
        }
    }

    /// Parses a snapshot string, case-insensitively. Unknown marks yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" => Some(Cell::Empty),
            "x" => Some(Cell::Marked(Side::X)),
            "o" => Some(Cell::Marked(Side::O)),
            _ => None,
        }
    }
}
