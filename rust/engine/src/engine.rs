use crate::board::{Board, Coord};
use crate::cells::{Cell, Side};
use crate::errors::GameError;
use crate::game::{Game, GameStatus};
use crate::rules::{has_line, validate_move};
use tracing::{debug, info, warn};

/// Result of one successfully applied move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Side whose mark was written
    pub side: Side,
    pub coord: Coord,
    /// Game status after the move
    pub status: GameStatus,
}

/// Starts a new game on an empty board.
///
/// X always moves first, so the human gets X when `human_goes_first` and O
/// otherwise. When the computer goes first the caller is expected to request
/// its opening move straight away.
///
/// # Examples
///
/// ```
/// use tictactoe_engine::cells::Side;
/// use tictactoe_engine::engine::create_game;
/// use tictactoe_engine::game::GameStatus;
///
/// let game = create_game(false);
/// assert_eq!(game.human_side(), Side::O);
/// assert_eq!(game.next_move(), Some(Side::X));
/// assert_eq!(game.status(), GameStatus::InProgress);
/// assert!(game.is_computer_turn());
/// ```
pub fn create_game(human_goes_first: bool) -> Game {
    let human_side = if human_goes_first { Side::X } else { Side::O };
    debug!(human_side = %human_side, "game created");
    Game {
        board: Board::new(),
        next_move: Some(Side::X),
        status: GameStatus::InProgress,
        human_side,
        moves: Vec::with_capacity(9),
    }
}

/// Plays the side due to move at `coord`, then settles the status.
///
/// A side that completes a line wins; otherwise a full board is a draw;
/// otherwise the turn passes. Either way a terminal game has its next side
/// cleared. Only one cell changes per call, so at most one side can have
/// completed a line.
///
/// # Errors
///
/// Returns an invalid-move [`GameError`] for an occupied cell, an
/// out-of-range coordinate or a finished game. The game is left untouched
/// on error.
///
/// # Examples
///
/// ```
/// use tictactoe_engine::board::Coord;
/// use tictactoe_engine::engine::{apply_move, create_game};
/// use tictactoe_engine::errors::GameError;
///
/// let mut game = create_game(true);
/// apply_move(&mut game, Coord::new(1, 1)).unwrap();
///
/// let err = apply_move(&mut game, Coord::new(1, 1)).unwrap_err();
/// assert_eq!(err, GameError::CellOccupied { row: 1, col: 1 });
/// assert_eq!(game.moves().len(), 1);
/// ```
pub fn apply_move(game: &mut Game, coord: Coord) -> Result<MoveOutcome, GameError> {
    let side = match validate_move(game, coord) {
        Ok(side) => side,
        Err(e) => {
            warn!(row = coord.row, col = coord.col, error = %e, "move rejected");
            return Err(e);
        }
    };

    game.board.set(coord, Cell::Marked(side));
    game.moves.push(coord);
    debug!(side = %side, row = coord.row, col = coord.col, "move applied");

    if has_line(&game.board, side) {
        game.status = GameStatus::won_by(side);
        game.next_move = None;
    } else if game.board.is_full() {
        game.status = GameStatus::Draw;
        game.next_move = None;
    } else {
        game.next_move = Some(side.opponent());
    }

    if game.status.is_terminal() {
        info!(status = %game.status, moves = game.moves.len(), "game finished");
    }

    Ok(MoveOutcome {
        side,
        coord,
        status: game.status,
    })
}
