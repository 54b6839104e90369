//! Command-line argument types.

use crate::session::Opening;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "tictactoe",
    version,
    about = "Tic-tac-toe against a heuristic computer opponent"
)]
pub struct TictactoeCli {
    /// Log engine and opponent decisions to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively; tiles are entered as row-col, q quits
    Play {
        /// Let the computer take X and move first
        #[arg(long, conflicts_with = "human_first")]
        computer_first: bool,
        /// Take X and move first, whatever the configuration says
        #[arg(long)]
        human_first: bool,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: Option<u32>,
        /// How the computer opens a game it starts
        #[arg(long, value_enum)]
        opening: Option<Opening>,
        /// Print a JSON snapshot instead of the board after each move
        #[arg(long)]
        json: bool,
    },
    /// Pit the heuristic opponent against a uniformly random mover
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        opening: Option<Opening>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
