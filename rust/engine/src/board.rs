use crate::cells::{Cell, Side};
use crate::errors::GameError;
use std::fmt;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// A zero-based `(row, col)` position on the board.
///
/// Construction is unchecked so that callers can hand any pair to the
/// engine; range validation happens when a move is applied.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_range(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// All nine positions in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 3x3 grid. Only the engine writes to it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a snapshot-shaped grid of mark strings.
    ///
    /// Marks are `"x"`/`"o"` (either case) or `""` for an empty cell. Mark
    /// counts are not checked here; see [`Board::has_valid_counts`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tictactoe_engine::board::{Board, Coord};
    /// use tictactoe_engine::cells::{Cell, Side};
    ///
    /// let board = Board::from_rows(&[
    ///     ["x", "o", ""],
    ///     ["x", "o", ""],
    ///     ["", "", ""],
    /// ])
    /// .unwrap();
    /// assert_eq!(board.get(Coord::new(1, 1)), Some(Cell::Marked(Side::O)));
    /// assert_eq!(board.next_side(), Some(Side::X));
    /// ```
    pub fn from_rows(rows: &[[&str; SIZE]; SIZE]) -> Result<Self, GameError> {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, mark) in row.iter().enumerate() {
                board.cells[r][c] = Cell::parse(mark)
                    .ok_or_else(|| GameError::InvalidBoard(format!("unknown mark {:?}", mark)))?;
            }
        }
        Ok(board)
    }

    /// True when X has as many marks as O or exactly one more, as in any
    /// position reached by alternating moves from an empty board.
    pub fn has_valid_counts(&self) -> bool {
        let (x, o) = (self.count(Side::X), self.count(Side::O));
        x == o || x == o + 1
    }

    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    pub fn is_empty_at(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.side() == Some(side))
            .count()
    }

    /// Empty positions in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::all().filter(|&c| self.is_empty_at(c)).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Side due to move judged from mark counts alone, `None` when full.
    /// Does not look for a completed line.
    pub fn next_side(&self) -> Option<Side> {
        if self.is_full() {
            return None;
        }
        if self.count(Side::X) > self.count(Side::O) {
            Some(Side::O)
        } else {
            Some(Side::X)
        }
    }

    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// The snapshot shape handed to templates: three rows of three mark
    /// strings, `""` for unoccupied.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.as_str().to_string()).collect())
            .collect()
    }
}
