//! Board and move formatters for terminal display.
//!
//! Pure functions; nothing here touches the game state.
//!
//! ## Example
//!
//! ```rust
//! use tictactoe_engine::board::{Board, Coord};
//! use tictactoe_cli::formatters::{format_board, tile_id};
//!
//! let board = Board::from_rows(&[["x", "", ""], ["", "o", ""], ["", "", ""]]).unwrap();
//! assert!(format_board(&board).contains("0   x | . | ."));
//! assert_eq!(tile_id(Coord::new(1, 1)), "1-1");
//! ```

use tictactoe_engine::board::{Board, Coord};
use tictactoe_engine::cells::Cell;

const EMPTY_MARK: &str = ".";

/// Tile id as typed at the prompt: `row-col`.
pub fn tile_id(coord: Coord) -> String {
    format!("{}-{}", coord.row, coord.col)
}

fn cell_mark(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => EMPTY_MARK,
        Cell::Marked(side) => side.mark(),
    }
}

/// Render the board with row and column indices.
///
/// ```text
///     0   1   2
/// 0   x | . | o
///    ---+---+---
/// 1   . | x | .
///    ---+---+---
/// 2   . | . | .
/// ```
pub fn format_board(board: &Board) -> String {
    let mut lines = vec!["    0   1   2".to_string()];
    for (r, row) in board.cells().iter().enumerate() {
        if r > 0 {
            lines.push("   ---+---+---".to_string());
        }
        let marks: Vec<&str> = row.iter().map(|&c| cell_mark(c)).collect();
        lines.push(format!("{}   {}", r, marks.join(" | ")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_layout() {
        let rendered = format_board(&Board::new());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "    0   1   2");
        assert_eq!(lines[1], "0   . | . | .");
        assert_eq!(lines[2], "   ---+---+---");
        assert_eq!(lines[5], "2   . | . | .");
    }

    #[test]
    fn marks_are_lowercase() {
        let board = Board::from_rows(&[["X", "", "O"], ["", "", ""], ["", "", ""]]).unwrap();
        assert!(format_board(&board).contains("0   x | . | o"));
    }

    #[test]
    fn tile_ids_are_row_then_col() {
        assert_eq!(tile_id(Coord::new(2, 0)), "2-0");
        assert_eq!(tile_id(Coord::new(0, 2)), "0-2");
    }
}
