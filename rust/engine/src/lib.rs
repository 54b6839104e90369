//! # tictactoe-engine: Game State Authority
//!
//! Owns the 3x3 board, turn order and terminal-state detection for a game
//! between a human and a computer opponent. The engine is the only code that
//! mutates a [`game::Game`]; everything else reads it.
//!
//! ## Core Modules
//!
//! - [`cells`] - Side (X/O) and Cell representation
//! - [`board`] - Board grid, coordinates and the row snapshot shape
//! - [`rules`] - The eight winning lines and move validation
//! - [`game`] - Game aggregate, status and snapshots
//! - [`engine`] - Game creation and move application
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use tictactoe_engine::board::Coord;
//! use tictactoe_engine::engine::{apply_move, create_game};
//! use tictactoe_engine::game::GameStatus;
//!
//! let mut game = create_game(true);
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     apply_move(&mut game, Coord::new(row, col)).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::XWins);
//! assert_eq!(game.next_move(), None);
//! ```
//!
//! ## Snapshots
//!
//! Renderers receive the board as three rows of mark strings:
//!
//! ```rust
//! use tictactoe_engine::engine::create_game;
//!
//! let game = create_game(true);
//! let rows = game.board().rows();
//! assert_eq!(rows.len(), 3);
//! assert!(rows.iter().flatten().all(|cell| cell.is_empty()));
//! ```

pub mod board;
pub mod cells;
pub mod engine;
pub mod errors;
pub mod game;
pub mod rules;

pub use board::{Board, Coord};
pub use cells::{Cell, Side};
pub use engine::{apply_move, create_game, MoveOutcome};
pub use errors::{ErrorKind, GameError};
pub use game::{Game, GameSnapshot, GameStatus, PlayerStatus};
