//! # tictactoe-ai: Computer Opponent for Tic-Tac-Toe
//!
//! Chooses tiles for the computer side of a [`tictactoe_engine::game::Game`].
//! The opponent only reads board snapshots; applying its choice is left to
//! the caller through [`tictactoe_engine::engine::apply_move`].
//!
//! ## Core Components
//!
//! - [`heuristic`] - win, block, then random tile selection
//! - [`HeuristicOpponent`] - the heuristic bundled with its random source
//!
//! ## Quick Start
//!
//! ```rust
//! use tictactoe_ai::HeuristicOpponent;
//! use tictactoe_engine::board::Coord;
//! use tictactoe_engine::engine::{apply_move, create_game};
//!
//! let mut game = create_game(true);
//! let mut ai = HeuristicOpponent::with_seed(42);
//!
//! apply_move(&mut game, Coord::new(1, 1)).unwrap();
//! let decision = ai.decide(&game).expect("computer has a move");
//! apply_move(&mut game, decision.coord).unwrap();
//! assert!(game.is_human_turn());
//! ```
//!
//! ## Deterministic Play
//!
//! The random tier draws from an injected generator, so a seed fixes every
//! choice:
//!
//! ```rust
//! use tictactoe_ai::HeuristicOpponent;
//! use tictactoe_engine::board::Board;
//! use tictactoe_engine::cells::Side;
//!
//! let board = Board::new();
//! let a = HeuristicOpponent::with_seed(7).choose(&board, Side::X).unwrap();
//! let b = HeuristicOpponent::with_seed(7).choose(&board, Side::X).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod heuristic;

pub use heuristic::{
    blocking_move, choose_move, random_move, winning_move, Decision, HeuristicOpponent, Tier,
};
