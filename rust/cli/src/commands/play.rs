//! # Play Command
//!
//! Interactive tic-tac-toe against the heuristic opponent.
//!
//! The human enters tiles as `row-col` ids. After every accepted move the
//! computer replies at once and the board (or a JSON snapshot with
//! `--json`) is printed. Unparseable input and illegal moves print an error
//! and re-prompt; `q`, `quit` or end of input stops the session.

use crate::error::CliError;
use crate::formatters::{format_board, tile_id};
use crate::io_utils::read_stdin_line;
use crate::session::{ComputerMove, GameSession, Opening};
use crate::ui;
use crate::validation::{ParseResult, parse_tile_id};
use std::io::{BufRead, Write};
use tictactoe_engine::game::PlayerStatus;

#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    pub human_first: bool,
    pub games: u32,
    /// RNG seed for the opponent's random tier (default: random)
    pub seed: Option<u64>,
    pub opening: Opening,
    pub json: bool,
}

/// Handle the play command.
///
/// # Returns
///
/// * `Ok(())` when the requested games are finished or the player quits
/// * `Err(CliError)` if `games` is zero or an I/O error occurs
///
/// # Examples
///
/// ```ignore
/// use tictactoe_cli::commands::{handle_play_command, PlayOptions};
/// use tictactoe_cli::session::Opening;
/// use std::io::{stdin, stdout, stderr};
///
/// let opts = PlayOptions { human_first: true, games: 1, seed: None, opening: Opening::Center, json: false };
/// handle_play_command(opts, &mut stdout(), &mut stderr(), &mut stdin().lock()).unwrap();
/// ```
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if opts.games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let seed = opts.seed.unwrap_or_else(rand::random);
    writeln!(
        out,
        "play: games={} seed={} first={} opening={}",
        opts.games,
        seed,
        if opts.human_first { "human" } else { "computer" },
        opts.opening.as_str()
    )?;

    let mut session = GameSession::new(opts.opening, seed);
    writeln!(out, "Opponent: {}", session.opponent_name())?;
    let mut played = 0u32;
    let (mut won, mut lost, mut drawn) = (0u32, 0u32, 0u32);
    let mut quit_requested = false;

    for i in 1..=opts.games {
        writeln!(out, "Game {}", i)?;
        if let Some(opening) = session.new_game(opts.human_first)? {
            write_computer_move(out, &opening)?;
        }
        writeln!(out, "You are {}", session.game().human_side())?;
        show(out, &session, opts.json)?;

        while !session.game().is_over() {
            write!(out, "Enter tile (row-col) or q: ")?;
            out.flush()?;

            let Some(input) = read_stdin_line(stdin) else {
                quit_requested = true;
                break;
            };
            match parse_tile_id(&input) {
                ParseResult::Tile(coord) => match session.play_human(coord) {
                    Ok(round) => {
                        writeln!(out, "You: {}", tile_id(round.human.coord))?;
                        if let Some(reply) = round.computer {
                            write_computer_move(out, &reply)?;
                        }
                        show(out, &session, opts.json)?;
                    }
                    Err(e) if e.is_invalid_move() => ui::write_error(err, &e.to_string())?,
                    Err(e) => return Err(e.into()),
                },
                ParseResult::Quit => {
                    quit_requested = true;
                    break;
                }
                ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            }
        }

        if quit_requested {
            break;
        }

        let status = session.game().player_status();
        match status {
            PlayerStatus::Won => won += 1,
            PlayerStatus::Lost => lost += 1,
            PlayerStatus::Draw => drawn += 1,
            PlayerStatus::InProgress => {}
        }
        writeln!(out, "Result: {}", status)?;
        played += 1;
    }

    writeln!(out, "Games played: {} (completed)", played)?;
    writeln!(out, "Won: {} Lost: {} Draw: {}", won, lost, drawn)?;
    Ok(())
}

fn write_computer_move(out: &mut dyn Write, mv: &ComputerMove) -> Result<(), CliError> {
    writeln!(
        out,
        "Computer: {} ({})",
        tile_id(mv.outcome.coord),
        mv.reason.as_str()
    )?;
    Ok(())
}

fn show(out: &mut dyn Write, session: &GameSession, json: bool) -> Result<(), CliError> {
    if json {
        let line = serde_json::to_string(&session.snapshot()).map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
    } else {
        writeln!(out, "{}", format_board(session.game().board()))?;
    }
    Ok(())
}
