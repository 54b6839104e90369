//! # Sim Command
//!
//! Plays the heuristic opponent against a mover that picks uniformly among
//! the empty tiles, alternating who takes X. The random mover goes through
//! the same [`GameSession`] as a human would, so the computer's replies and
//! openings are exactly those of `play`.
//!
//! Both random sources derive from one seed, making a run reproducible.

use crate::error::CliError;
use crate::session::{GameSession, MoveReason, Opening};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use tictactoe_ai::heuristic::{Tier, random_move};
use tictactoe_engine::errors::GameError;
use tictactoe_engine::game::PlayerStatus;
use tracing::info;

/// Aggregate results, counted from the heuristic's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    pub games: u32,
    pub heuristic_wins: u32,
    pub random_wins: u32,
    pub draws: u32,
    pub win_moves: u32,
    pub block_moves: u32,
    pub random_moves: u32,
    pub opening_moves: u32,
}

impl SimStats {
    fn record_move(&mut self, reason: MoveReason) {
        match reason {
            MoveReason::Opening => self.opening_moves += 1,
            MoveReason::Heuristic(Tier::Win) => self.win_moves += 1,
            MoveReason::Heuristic(Tier::Block) => self.block_moves += 1,
            MoveReason::Heuristic(Tier::Random) => self.random_moves += 1,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.heuristic_wins as f64 * 100.0 / self.games as f64
        }
    }
}

/// Plays `games` games and tallies them.
///
/// The random mover takes X in even-numbered games (counting from zero).
pub fn run_sim(games: u32, seed: u64, opening: Opening) -> Result<SimStats, GameError> {
    let mut session = GameSession::new(opening, seed);
    let mut mover = ChaCha20Rng::seed_from_u64(seed.wrapping_add(1));
    let mut stats = SimStats::default();

    for i in 0..games {
        if let Some(mv) = session.new_game(i % 2 == 0)? {
            stats.record_move(mv.reason);
        }
        while !session.game().is_over() {
            let coord =
                random_move(session.game().board(), &mut mover).ok_or(GameError::NoEmptyTiles)?;
            let round = session.play_human(coord)?;
            if let Some(mv) = round.computer {
                stats.record_move(mv.reason);
            }
        }

        // the random mover sits in the human seat
        match session.game().player_status() {
            PlayerStatus::Lost => stats.heuristic_wins += 1,
            PlayerStatus::Won => stats.random_wins += 1,
            PlayerStatus::Draw => stats.draws += 1,
            PlayerStatus::InProgress => {}
        }
        stats.games += 1;
    }

    info!(
        games = stats.games,
        heuristic_wins = stats.heuristic_wins,
        random_wins = stats.random_wins,
        draws = stats.draws,
        "sim finished"
    );
    Ok(stats)
}

/// Handle the sim command.
///
/// # Errors
///
/// `CliError::InvalidInput` for zero games, `CliError::Io` when writing the
/// report fails.
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    opening: Opening,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let seed = seed.unwrap_or_else(rand::random);
    writeln!(
        out,
        "sim: games={} seed={} opening={}",
        games,
        seed,
        opening.as_str()
    )?;

    let stats = run_sim(games, seed, opening)?;
    writeln!(out, "Heuristic wins: {}", stats.heuristic_wins)?;
    writeln!(out, "Random wins: {}", stats.random_wins)?;
    writeln!(out, "Draws: {}", stats.draws)?;
    writeln!(out, "Heuristic win rate: {:.1}%", stats.win_rate())?;
    writeln!(
        out,
        "Moves: win={} block={} random={} opening={}",
        stats.win_moves, stats.block_moves, stats.random_moves, stats.opening_moves
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_cover_every_game() {
        let stats = run_sim(50, 42, Opening::Center).unwrap();
        assert_eq!(stats.games, 50);
        assert_eq!(stats.heuristic_wins + stats.random_wins + stats.draws, 50);
    }

    #[test]
    fn same_seed_same_result() {
        let a = run_sim(40, 7, Opening::Heuristic).unwrap();
        let b = run_sim(40, 7, Opening::Heuristic).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn heuristic_beats_random_play() {
        let stats = run_sim(200, 42, Opening::Center).unwrap();
        assert!(
            stats.heuristic_wins > stats.random_wins,
            "heuristic {} vs random {}",
            stats.heuristic_wins,
            stats.random_wins
        );
        assert!(stats.block_moves > 0);
        assert!(stats.win_moves > 0);
    }

    #[test]
    fn centre_opening_is_used_in_games_the_computer_starts() {
        let stats = run_sim(10, 3, Opening::Center).unwrap();
        // odd-numbered games: 1, 3, 5, 7, 9
        assert_eq!(stats.opening_moves, 5);

        let stats = run_sim(10, 3, Opening::Heuristic).unwrap();
        assert_eq!(stats.opening_moves, 0);
    }

    #[test]
    fn report_format() {
        let mut out = Vec::new();
        handle_sim_command(4, Some(1), Opening::Center, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("sim: games=4 seed=1 opening=center"));
        assert!(out.contains("Heuristic win rate: "));
        assert!(out.contains("Moves: win="));
    }

    #[test]
    fn win_rate_of_empty_stats_is_zero() {
        assert_eq!(SimStats::default().win_rate(), 0.0);
    }
}
