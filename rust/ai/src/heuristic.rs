//! Three-tier heuristic opponent.
//!
//! Picks a tile for the side due to move, trying in strict order:
//!
//! 1. **Win** - complete a line that already holds two of our marks
//! 2. **Block** - fill the gap in a line that holds two of the opponent's marks
//! 3. **Random** - any empty tile, uniformly
//!
//! Lines are scanned in [`LINES`] order (rows, columns, then the two
//! diagonals) and the first qualifying line decides. A win is always taken
//! over a block, even when the opponent threatens to win on the next turn.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tictactoe_engine::board::{Board, Coord};
use tictactoe_engine::cells::Side;
use tictactoe_engine::errors::GameError;
use tictactoe_engine::game::Game;
use tictactoe_engine::rules::{first_empty_on_line, marks_on_line, winner, LINES};
use tracing::debug;

/// Which rule produced a decision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Tier {
    Win,
    Block,
    Random,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Win => "win",
            Tier::Block => "block",
            Tier::Random => "random",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Decision {
    pub coord: Coord,
    pub tier: Tier,
}

/// First tile that gives `side` three in a line, scanning lines in order.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::heuristic::winning_move;
/// use tictactoe_engine::board::{Board, Coord};
/// use tictactoe_engine::cells::Side;
///
/// let board = Board::from_rows(&[["x", "o", ""], ["x", "o", ""], ["", "", ""]]).unwrap();
/// assert_eq!(winning_move(&board, Side::O), Some(Coord::new(2, 1)));
/// assert_eq!(winning_move(&board, Side::X), Some(Coord::new(2, 0)));
/// ```
pub fn winning_move(board: &Board, side: Side) -> Option<Coord> {
    completing_tile(board, side)
}

/// First tile that stops the opponent of `side` completing a line.
pub fn blocking_move(board: &Board, side: Side) -> Option<Coord> {
    completing_tile(board, side.opponent())
}

/// Uniformly random empty tile, `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.random_range(0..empty.len())])
}

// A line with two of `side`'s marks has exactly one other cell; it qualifies
// only when that cell is empty.
fn completing_tile(board: &Board, side: Side) -> Option<Coord> {
    LINES.iter().find_map(|line| {
        if marks_on_line(board, line, side) == 2 {
            first_empty_on_line(board, line)
        } else {
            None
        }
    })
}

/// Chooses a tile for `side` on `board`.
///
/// `board` is only read. `rng` is consulted only when neither a winning nor
/// a blocking tile exists.
///
/// # Errors
///
/// - [`GameError::NoEmptyTiles`] when the board is full
/// - [`GameError::NoSideToMove`] when a line is already complete
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use tictactoe_ai::heuristic::{choose_move, Tier};
/// use tictactoe_engine::board::{Board, Coord};
/// use tictactoe_engine::cells::Side;
///
/// let board = Board::from_rows(&[["", "x", ""], ["", "x", ""], ["", "", ""]]).unwrap();
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let decision = choose_move(&board, Side::O, &mut rng).unwrap();
/// assert_eq!(decision.coord, Coord::new(2, 1));
/// assert_eq!(decision.tier, Tier::Block);
/// ```
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    rng: &mut R,
) -> Result<Decision, GameError> {
    if board.is_full() {
        return Err(GameError::NoEmptyTiles);
    }
    if winner(board).is_some() {
        return Err(GameError::NoSideToMove);
    }

    let decision = if let Some(coord) = winning_move(board, side) {
        Decision {
            coord,
            tier: Tier::Win,
        }
    } else if let Some(coord) = blocking_move(board, side) {
        Decision {
            coord,
            tier: Tier::Block,
        }
    } else {
        let coord = random_move(board, rng).ok_or(GameError::NoEmptyTiles)?;
        Decision {
            coord,
            tier: Tier::Random,
        }
    };

    debug!(
        side = %side,
        row = decision.coord.row,
        col = decision.coord.col,
        tier = decision.tier.as_str(),
        "opponent chose tile"
    );
    Ok(decision)
}

/// The computer player: the heuristic plus the random source for its
/// fallback tier.
///
/// # Example
///
/// ```rust
/// use tictactoe_ai::heuristic::HeuristicOpponent;
/// use tictactoe_engine::engine::{apply_move, create_game};
///
/// let mut game = create_game(false);
/// let mut ai = HeuristicOpponent::with_seed(42);
///
/// let decision = ai.decide(&game).unwrap();
/// apply_move(&mut game, decision.coord).unwrap();
/// assert!(game.is_human_turn());
/// ```
#[derive(Debug, Clone)]
pub struct HeuristicOpponent<R = ChaCha20Rng> {
    rng: R,
}

impl HeuristicOpponent<ChaCha20Rng> {
    /// Opponent with a randomly seeded generator.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Opponent whose random tier is reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicOpponent<ChaCha20Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HeuristicOpponent<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn name(&self) -> &str {
        "HeuristicAI"
    }

    /// Chooses a tile for `side` on a board snapshot.
    pub fn choose(&mut self, board: &Board, side: Side) -> Result<Decision, GameError> {
        choose_move(board, side, &mut self.rng)
    }

    /// Chooses a tile for whichever side is due to move in `game`.
    ///
    /// # Errors
    ///
    /// [`GameError::NoSideToMove`] when the game is over, otherwise as
    /// [`choose_move`].
    pub fn decide(&mut self, game: &Game) -> Result<Decision, GameError> {
        let side = game.next_move().ok_or(GameError::NoSideToMove)?;
        self.choose(game.board(), side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::engine::{apply_move, create_game};

    fn board(rows: [[&str; 3]; 3]) -> Board {
        Board::from_rows(&rows).expect("valid board")
    }

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(12345)
    }

    #[test]
    fn takes_own_column_win() {
        let b = board([["x", "o", ""], ["x", "o", ""], ["", "", ""]]);
        let d = choose_move(&b, Side::O, &mut rng()).unwrap();
        assert_eq!(d, Decision { coord: Coord::new(2, 1), tier: Tier::Win });
    }

    #[test]
    fn blocks_column_threat() {
        let b = board([["", "x", ""], ["", "x", ""], ["", "", ""]]);
        let d = choose_move(&b, Side::O, &mut rng()).unwrap();
        assert_eq!(d, Decision { coord: Coord::new(2, 1), tier: Tier::Block });
    }

    #[test]
    fn win_beats_block() {
        // o threatens row 1, x threatens row 0; x to move takes its own win
        let b = board([["x", "x", ""], ["o", "o", ""], ["x", "", "o"]]);
        let d = choose_move(&b, Side::X, &mut rng()).unwrap();
        assert_eq!(d.coord, Coord::new(0, 2));
        assert_eq!(d.tier, Tier::Win);
    }

    #[test]
    fn block_diagonal() {
        let b = board([["o", "", "x"], ["", "o", ""], ["x", "", ""]]);
        assert_eq!(blocking_move(&b, Side::X), Some(Coord::new(2, 2)));
    }

    #[test]
    fn block_anti_diagonal() {
        let b = board([["x", "", "o"], ["", "o", ""], ["", "", "x"]]);
        assert_eq!(blocking_move(&b, Side::X), Some(Coord::new(2, 0)));
    }

    #[test]
    fn rows_are_scanned_before_columns() {
        // o can block row 1 at (1,2) or column 0 at (2,0)
        let b = board([["x", "", "o"], ["x", "x", ""], ["", "", "o"]]);
        assert_eq!(blocking_move(&b, Side::O), Some(Coord::new(1, 2)));
    }

    #[test]
    fn blocking_and_winning_tiles_are_found_independently() {
        let b = board([["x", "", "x"], ["o", "o", ""], ["o", "x", "x"]]);
        assert_eq!(blocking_move(&b, Side::X), Some(Coord::new(1, 2)));
        assert_eq!(winning_move(&b, Side::X), Some(Coord::new(0, 1)));
    }

    #[test]
    fn line_with_two_marks_and_an_opponent_mark_does_not_qualify() {
        let b = board([["x", "x", "o"], ["", "o", ""], ["", "", ""]]);
        assert_eq!(winning_move(&b, Side::X), None);
    }

    #[test]
    fn random_tier_when_nothing_to_win_or_block() {
        let b = board([["x", "", ""], ["", "", ""], ["", "", ""]]);
        let d = choose_move(&b, Side::O, &mut rng()).unwrap();
        assert_eq!(d.tier, Tier::Random);
        assert!(b.is_empty_at(d.coord));
    }

    #[test]
    fn full_board_is_invalid_state() {
        let b = board([["x", "o", "x"], ["x", "o", "o"], ["o", "x", "x"]]);
        assert_eq!(
            choose_move(&b, Side::O, &mut rng()),
            Err(GameError::NoEmptyTiles)
        );
    }

    #[test]
    fn won_board_is_invalid_state() {
        let b = board([["x", "x", "x"], ["o", "o", ""], ["", "", ""]]);
        assert_eq!(
            choose_move(&b, Side::O, &mut rng()),
            Err(GameError::NoSideToMove)
        );
    }

    #[test]
    fn decide_on_finished_game_fails() {
        let mut game = create_game(true);
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            apply_move(&mut game, Coord::new(r, c)).unwrap();
        }
        let mut ai = HeuristicOpponent::with_seed(1);
        assert_eq!(ai.decide(&game), Err(GameError::NoSideToMove));
    }

    #[test]
    fn same_seed_same_choices() {
        let b = Board::new();
        let mut a = HeuristicOpponent::with_seed(99);
        let mut c = HeuristicOpponent::with_seed(99);
        for _ in 0..20 {
            assert_eq!(a.choose(&b, Side::X), c.choose(&b, Side::X));
        }
    }

    #[test]
    fn name_is_stable() {
        assert_eq!(HeuristicOpponent::with_seed(0).name(), "HeuristicAI");
    }
}
