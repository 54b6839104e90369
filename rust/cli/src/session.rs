//! Turn sequencing between the human and the computer.
//!
//! A [`GameSession`] owns the current game and the opponent and is the
//! only writer of either. Each human move is answered by the computer in
//! the same call, and a computer that goes first plays its opening as soon
//! as the game is created, so between calls the game is always waiting on
//! the human or finished.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_ai::heuristic::{HeuristicOpponent, Tier};
use tictactoe_engine::board::Coord;
use tictactoe_engine::engine::{MoveOutcome, apply_move, create_game};
use tictactoe_engine::errors::GameError;
use tictactoe_engine::game::{Game, GameSnapshot};
use tracing::debug;

/// Tile the computer takes when it opens with [`Opening::Center`].
pub const CENTER: Coord = Coord::new(1, 1);

/// How the computer plays the first move of a game it starts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Opening {
    /// Always the centre tile
    #[default]
    Center,
    /// Ask the heuristic like any other move
    Heuristic,
}

impl Opening {
    pub fn as_str(self) -> &'static str {
        match self {
            Opening::Center => "center",
            Opening::Heuristic => "heuristic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" => Some(Opening::Center),
            "heuristic" => Some(Opening::Heuristic),
            _ => None,
        }
    }
}

/// Why the computer picked its tile.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveReason {
    Opening,
    Heuristic(Tier),
}

impl MoveReason {
    pub fn as_str(self) -> &'static str {
        match self {
            MoveReason::Opening => "opening",
            MoveReason::Heuristic(tier) => tier.as_str(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ComputerMove {
    pub outcome: MoveOutcome,
    pub reason: MoveReason,
}

/// A human move and the reply it triggered, if the game was still running.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Round {
    pub human: MoveOutcome,
    pub computer: Option<ComputerMove>,
}

#[derive(Debug)]
pub struct GameSession {
    game: Game,
    opponent: HeuristicOpponent,
    opening: Opening,
}

impl GameSession {
    /// Session with an opponent seeded from `seed`.
    ///
    /// Holds a fresh human-first game until [`GameSession::new_game`] is
    /// called.
    pub fn new(opening: Opening, seed: u64) -> Self {
        Self {
            game: create_game(true),
            opponent: HeuristicOpponent::with_seed(seed),
            opening,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }

    /// Replaces the current game. When the computer goes first its opening
    /// move is played before returning.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tictactoe_cli::session::{GameSession, MoveReason, Opening, CENTER};
    ///
    /// let mut session = GameSession::new(Opening::Center, 7);
    /// let opening = session.new_game(false).unwrap().unwrap();
    /// assert_eq!(opening.outcome.coord, CENTER);
    /// assert_eq!(opening.reason, MoveReason::Opening);
    /// assert!(session.game().is_human_turn());
    /// ```
    pub fn new_game(&mut self, human_first: bool) -> Result<Option<ComputerMove>, GameError> {
        self.game = create_game(human_first);
        if self.game.is_computer_turn() {
            self.computer_turn().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Plays the human's tile, then the computer's reply if the game is
    /// still in progress.
    ///
    /// # Errors
    ///
    /// The engine's invalid-move errors for the human tile. The game is left
    /// untouched and the computer does not move.
    pub fn play_human(&mut self, coord: Coord) -> Result<Round, GameError> {
        let human = apply_move(&mut self.game, coord)?;

        let computer = if self.game.is_over() {
            None
        } else {
            Some(self.computer_turn()?)
        };

        Ok(Round { human, computer })
    }

    fn computer_turn(&mut self) -> Result<ComputerMove, GameError> {
        let (coord, reason) = if self.game.moves().is_empty() && self.opening == Opening::Center {
            (CENTER, MoveReason::Opening)
        } else {
            let decision = self.opponent.decide(&self.game)?;
            (decision.coord, MoveReason::Heuristic(decision.tier))
        };

        let outcome = apply_move(&mut self.game, coord)?;
        debug!(
            row = coord.row,
            col = coord.col,
            reason = reason.as_str(),
            "computer moved"
        );
        Ok(ComputerMove { outcome, reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::TestLogSubscriber;
    use tictactoe_engine::cells::Side;
    use tictactoe_engine::game::{GameStatus, PlayerStatus};
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn human_first_game_waits_for_human() {
        let mut session = GameSession::new(Opening::Center, 1);
        assert_eq!(session.new_game(true).unwrap(), None);
        assert!(session.game().is_human_turn());
        assert!(session.game().moves().is_empty());
    }

    #[test]
    fn heuristic_opening_asks_the_opponent() {
        let mut session = GameSession::new(Opening::Heuristic, 3);
        let opening = session.new_game(false).unwrap().unwrap();
        assert_eq!(opening.reason, MoveReason::Heuristic(Tier::Random));
        assert_eq!(opening.outcome.side, Side::X);
        assert_eq!(session.game().moves().len(), 1);
    }

    #[test]
    fn human_move_is_answered() {
        let mut session = GameSession::new(Opening::Center, 5);
        session.new_game(true).unwrap();
        let round = session.play_human(Coord::new(0, 0)).unwrap();
        assert_eq!(round.human.side, Side::X);
        let reply = round.computer.expect("computer replies");
        assert_eq!(reply.outcome.side, Side::O);
        assert_ne!(reply.outcome.coord, Coord::new(0, 0));
        assert!(session.game().is_human_turn());
    }

    #[test]
    fn rejected_move_leaves_game_and_computer_idle() {
        let mut session = GameSession::new(Opening::Center, 5);
        session.new_game(false).unwrap();
        let before = session.game().clone();

        let err = session.play_human(CENTER).unwrap_err();
        assert_eq!(err, GameError::CellOccupied { row: 1, col: 1 });
        assert_eq!(session.game(), &before);

        let err = session.play_human(Coord::new(4, 0)).unwrap_err();
        assert!(err.is_invalid_move());
        assert_eq!(session.game(), &before);
    }

    #[test]
    fn computer_blocks_a_fresh_threat() {
        let mut session = GameSession::new(Opening::Center, 11);
        session.new_game(true).unwrap();
        let first = session.play_human(Coord::new(0, 0)).unwrap();
        let taken = first.computer.unwrap().outcome.coord;

        // lines through (0,0): pick one the computer's tile does not touch
        let threats = [
            (Coord::new(0, 1), Coord::new(0, 2)),
            (Coord::new(1, 0), Coord::new(2, 0)),
            (Coord::new(1, 1), Coord::new(2, 2)),
        ];
        let &(second, gap) = threats
            .iter()
            .find(|(a, b)| *a != taken && *b != taken)
            .unwrap();

        let round = session.play_human(second).unwrap();
        let reply = round.computer.unwrap();
        assert_eq!(reply.outcome.coord, gap);
        assert_eq!(reply.reason, MoveReason::Heuristic(Tier::Block));
    }

    #[test]
    fn sessions_run_to_completion() {
        let mut session = GameSession::new(Opening::Center, 2024);
        for human_first in [true, false] {
            session.new_game(human_first).unwrap();
            while !session.game().is_over() {
                let tile = session.game().board().empty_cells()[0];
                session.play_human(tile).unwrap();
            }
            assert_eq!(session.game().next_move(), None);
            assert_ne!(session.game().player_status(), PlayerStatus::InProgress);
            assert_eq!(session.snapshot().status, session.game().status());
        }
    }

    #[test]
    fn finishing_move_ends_round_without_reply() {
        let mut session = GameSession::new(Opening::Center, 9);
        session.new_game(true).unwrap();
        loop {
            let tile = session.game().board().empty_cells()[0];
            let round = session.play_human(tile).unwrap();
            if round.human.status.is_terminal() {
                assert!(round.computer.is_none());
                break;
            }
            if session.game().is_over() {
                assert!(round.computer.unwrap().outcome.status.is_terminal());
                break;
            }
        }
        assert!(matches!(
            session.game().status(),
            GameStatus::XWins | GameStatus::OWins | GameStatus::Draw
        ));
    }

    #[test]
    fn computer_moves_are_logged_with_reason() {
        let logs = TestLogSubscriber::new();
        let registry = Registry::default().with(logs.clone().into_layer::<Registry>());
        tracing::subscriber::with_default(registry, || {
            let mut session = GameSession::new(Opening::Center, 4);
            session.new_game(false).unwrap();
        });

        let moved = logs.matching("computer moved");
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].field("reason"), Some("opening"));
    }

    #[test]
    fn opening_names_round_trip() {
        for opening in [Opening::Center, Opening::Heuristic] {
            assert_eq!(Opening::parse(opening.as_str()), Some(opening));
        }
        assert_eq!(Opening::parse("centre"), Some(Opening::Center));
        assert_eq!(Opening::parse("corner"), None);
    }
}
