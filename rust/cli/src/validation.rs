//! Input parsing for the interactive `play` command.
//!
//! Tiles are entered as `row-col` ids, both zero-based, the same ids the
//! board display prints. Range checking is left to the engine so that an
//! off-board tile reaches the player as an invalid move.

use tictactoe_engine::board::Coord;

/// Outcome of parsing one line of player input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A tile id, not yet checked against the board
    Tile(Coord),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a tile or a quit request.
///
/// Accepts `row-col` (whitespace around either number is ignored) and
/// `q`/`quit` in any case.
///
/// # Example
///
/// ```rust
/// # use tictactoe_cli::validation::{parse_tile_id, ParseResult};
/// use tictactoe_engine::board::Coord;
///
/// assert_eq!(parse_tile_id("2-0"), ParseResult::Tile(Coord::new(2, 0)));
/// assert_eq!(parse_tile_id("QUIT"), ParseResult::Quit);
///
/// match parse_tile_id("centre") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("row-col")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_tile_id(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();

    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if input == "q" || input == "quit" {
        return ParseResult::Quit;
    }

    let Some((row, col)) = input.split_once('-') else {
        return ParseResult::Invalid(format!(
            "Unrecognized tile '{}'. Enter a tile as row-col (e.g. 1-1) or q to quit",
            input
        ));
    };

    match (row.trim().parse::<usize>(), col.trim().parse::<usize>()) {
        (Ok(row), Ok(col)) => ParseResult::Tile(Coord::new(row, col)),
        _ => ParseResult::Invalid(format!(
            "Invalid tile '{}': row and column must be non-negative numbers",
            input
        )),
    }
}
