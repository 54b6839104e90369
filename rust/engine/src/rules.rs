use crate::board::{Board, Coord};
use crate::cells::Side;
use crate::errors::GameError;
use crate::game::Game;

/// A winning triple of board positions.
pub type Line = [Coord; 3];

const fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

/// The eight lines in scan order: rows top to bottom, columns left to right,
/// then the top-left and top-right diagonals.
pub const LINES: [Line; 8] = [
    [c(0, 0), c(0, 1), c(0, 2)],
    [c(1, 0), c(1, 1), c(1, 2)],
    [c(2, 0), c(2, 1), c(2, 2)],
    [c(0, 0), c(1, 0), c(2, 0)],
    [c(0, 1), c(1, 1), c(2, 1)],
    [c(0, 2), c(1, 2), c(2, 2)],
    [c(0, 0), c(1, 1), c(2, 2)],
    [c(0, 2), c(1, 1), c(2, 0)],
];

/// Number of `side`'s marks on `line`.
pub fn marks_on_line(board: &Board, line: &Line, side: Side) -> usize {
    line.iter()
        .filter(|&&pos| board.get(pos).and_then(|cell| cell.side()) == Some(side))
        .count()
}

/// First empty position on `line`, in line order.
pub fn first_empty_on_line(board: &Board, line: &Line) -> Option<Coord> {
    line.iter().copied().find(|&pos| board.is_empty_at(pos))
}

/// True when `side` holds all three cells of some line.
pub fn has_line(board: &Board, side: Side) -> bool {
    LINES
        .iter()
        .any(|line| marks_on_line(board, line, side) == 3)
}

/// The side holding a completed line, if any.
///
/// # Examples
///
/// ```
/// use tictactoe_engine::board::Board;
/// use tictactoe_engine::cells::Side;
/// use tictactoe_engine::rules::winner;
///
/// let board = Board::from_rows(&[["x", "o", ""], ["x", "o", ""], ["x", "", ""]]).unwrap();
/// assert_eq!(winner(&board), Some(Side::X));
/// ```
pub fn winner(board: &Board) -> Option<Side> {
    Side::ALL.into_iter().find(|&side| has_line(board, side))
}

/// Checks that `coord` can be played on `game` and returns the side that
/// would play it.
///
/// # Errors
///
/// - [`GameError::GameOver`] when the game has finished
/// - [`GameError::OutOfRange`] when either index is outside `0..=2`
/// - [`GameError::CellOccupied`] when the cell already holds a mark
pub fn validate_move(game: &Game, coord: Coord) -> Result<Side, GameError> {
    let side = game.next_move().ok_or(GameError::GameOver {
        status: game.status(),
    })?;
    if !coord.in_range() {
        return Err(GameError::OutOfRange {
            row: coord.row,
            col: coord.col,
        });
    }
    if !game.board().is_empty_at(coord) {
        return Err(GameError::CellOccupied {
            row: coord.row,
            col: coord.col,
        });
    }
    Ok(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lines_cover_each_cell_the_right_number_of_times() {
        let mut counts = [[0u8; 3]; 3];
        for line in LINES.iter() {
            for pos in line {
                counts[pos.row][pos.col] += 1;
            }
        }
        assert_eq!(counts[1][1], 4);
        assert_eq!(counts[0][0], 3);
        assert_eq!(counts[0][1], 2);
    }

    #[test]
    fn lines_are_distinct() {
        let set: HashSet<_> = LINES.iter().collect();
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn no_winner_on_partial_board() {
        let board = Board::from_rows(&[["x", "x", ""], ["o", "o", ""], ["", "", ""]]).unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn anti_diagonal_win() {
        let board = Board::from_rows(&[["x", "x", "o"], ["", "o", "x"], ["o", "", ""]]).unwrap();
        assert_eq!(winner(&board), Some(Side::O));
    }

    #[test]
    fn first_empty_follows_line_order() {
        let board = Board::from_rows(&[["", "x", ""], ["", "", ""], ["", "", ""]]).unwrap();
        assert_eq!(first_empty_on_line(&board, &LINES[0]), Some(Coord::new(0, 0)));
        assert_eq!(marks_on_line(&board, &LINES[4], Side::X), 1);
    }
}
