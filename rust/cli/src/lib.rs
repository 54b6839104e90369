//! # Tic-tac-toe CLI Library
//!
//! Terminal front end for the tic-tac-toe engine and its heuristic opponent.
//! It sequences turns between the player and the computer, resolves
//! configuration and renders the board.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["tictactoe", "play", "--computer-first"];
//! let code = tictactoe_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play interactively against the computer
//! - `sim`: Pit the heuristic opponent against random play
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{Cursor, Write};
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod session;
pub mod ui;
pub mod validation;

use cli::{Commands, TictactoeCli};
use commands::{PlayOptions, handle_cfg_command, handle_play_command, handle_sim_command};
pub use error::CliError;

/// When set, `play` reads its input from this variable instead of stdin.
pub const TEST_INPUT_ENV: &str = "TICTACTOE_TEST_INPUT";

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["tictactoe", "sim", "--games", "10", "--seed", "42"];
/// let code = tictactoe_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
///
/// # Available Commands
///
/// - `play [--computer-first | --human-first] [--seed N] [--games N] [--opening center|heuristic] [--json]`
/// - `sim --games N [--seed N] [--opening center|heuristic]`
/// - `cfg`
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TictactoeCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = writeln!(err, "{}", e);
                    let _ = writeln!(err, "Usage: tictactoe <command> [options]\n");
                    let _ = writeln!(err, "Commands:");
                    for c in COMMANDS {
                        let _ = writeln!(err, "  {}", c);
                    }
                    let _ = writeln!(err, "\nFor full help, run: tictactoe --help");
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Play {
            computer_first,
            human_first,
            seed,
            games,
            opening,
            json,
        } => {
            let cfg = config::load()?;
            let opts = PlayOptions {
                human_first: if computer_first {
                    false
                } else if human_first {
                    true
                } else {
                    cfg.human_first
                },
                games: games.unwrap_or(cfg.games),
                seed: seed.or(cfg.seed),
                opening: opening.unwrap_or(cfg.opening),
                json,
            };
            if opening.is_some() && opts.human_first {
                ui::display_warning(
                    err,
                    "--opening has no effect when the human moves first",
                )?;
            }

            if let Ok(script) = std::env::var(TEST_INPUT_ENV) {
                let mut input = Cursor::new(script.into_bytes());
                return handle_play_command(opts, out, err, &mut input);
            }
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(opts, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            games,
            seed,
            opening,
        } => {
            let cfg = config::load()?;
            handle_sim_command(
                games,
                seed.or(cfg.seed),
                opening.unwrap_or(cfg.opening),
                out,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_capture(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().copied(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, err) = run_capture(&["tictactoe", "--help"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("play"));
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_command_lists_commands() {
        let (code, _, err) = run_capture(&["tictactoe", "deal"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(err.contains("Commands:"));
        assert!(err.contains("  sim"));
    }

    #[test]
    fn bad_flag_value_is_an_error() {
        let (code, out, _) = run_capture(&["tictactoe", "sim", "--games", "lots"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(out.is_empty());
    }
}
