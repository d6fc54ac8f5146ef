//! Batch game simulation
//!
//! Plays many games with a uniformly random guesser against random secrets
//! and gathers statistics. This is a statistics tool for the scoring rule,
//! not a solver: guesses carry no strategy at all.

use crate::core::Peg;
use crate::session::Game;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulateConfig {
    pub games: usize,
    pub columns: usize,
    pub rows: usize,
    pub options: usize,
}

/// Result of a simulation run
pub struct SimulationResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    /// Winning turn -> number of games won on that turn
    pub turn_distribution: HashMap<usize, usize>,
    pub average_turns_to_win: f64,
    pub average_exact_per_guess: f64,
    pub average_present_per_guess: f64,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Outcome of one simulated game
struct GameOutcome {
    won: bool,
    turns: usize,
    guesses: usize,
    exact_total: usize,
    present_total: usize,
}

/// Run the simulation described by `config`
///
/// Games are independent, so they run in parallel with one board clone per
/// game.
///
/// # Errors
///
/// Returns an error for a zero game count, an oversized palette, or zero
/// board dimensions.
pub fn run_simulation(config: &SimulateConfig) -> Result<SimulationResult, String> {
    if config.games == 0 {
        return Err("Number of games must be at least 1".to_string());
    }

    let palette = Peg::palette(config.options).map_err(|e| e.to_string())?;
    let template =
        Game::new(config.columns, config.rows, palette).map_err(|e| e.to_string())?;

    // Progress bar
    let pb = ProgressBar::new(config.games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<GameOutcome> = (0..config.games)
        .into_par_iter()
        .map(|_| {
            let mut game = template.clone();
            let mut rng = rand::rng();
            let outcome = play_random_game(&mut game, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let wins = outcomes.iter().filter(|o| o.won).count();
    let mut turn_distribution: HashMap<usize, usize> = HashMap::new();
    let mut winning_turns = 0;
    for outcome in outcomes.iter().filter(|o| o.won) {
        *turn_distribution.entry(outcome.turns).or_insert(0) += 1;
        winning_turns += outcome.turns;
    }

    let total_guesses: usize = outcomes.iter().map(|o| o.guesses).sum();
    let total_exact: usize = outcomes.iter().map(|o| o.exact_total).sum();
    let total_present: usize = outcomes.iter().map(|o| o.present_total).sum();

    let average_turns_to_win = if wins > 0 {
        winning_turns as f64 / wins as f64
    } else {
        0.0
    };

    Ok(SimulationResult {
        total_games: config.games,
        wins,
        losses: config.games - wins,
        win_rate: wins as f64 / config.games as f64,
        turn_distribution,
        average_turns_to_win,
        average_exact_per_guess: total_exact as f64 / total_guesses as f64,
        average_present_per_guess: total_present as f64 / total_guesses as f64,
        duration,
        games_per_second: config.games as f64 / duration.as_secs_f64(),
    })
}

/// Play one game with uniformly random guesses against a random secret
fn play_random_game<R: Rng + ?Sized>(game: &mut Game<Peg>, rng: &mut R) -> GameOutcome {
    game.reset();
    game.randomize_secret(rng);

    let palette: Vec<Peg> = game.options().to_vec();
    let columns = game.board().columns();
    let rows = game.board().row_count();

    let mut exact_total = 0;
    let mut present_total = 0;
    let mut guesses = 0;

    for row in 0..rows {
        for column in 0..columns {
            if let Some(&peg) = palette.choose(rng) {
                game.place(row, column, peg);
            }
        }
        guesses += 1;

        if let Some(feedback) = game.compare(row) {
            exact_total += feedback.exact_matches();
            present_total += feedback.present_elsewhere();

            if feedback.is_full_match(columns) {
                return GameOutcome {
                    won: true,
                    turns: row + 1,
                    guesses,
                    exact_total,
                    present_total,
                };
            }
        }
    }

    GameOutcome {
        won: false,
        turns: rows,
        guesses,
        exact_total,
        present_total,
    }
}
