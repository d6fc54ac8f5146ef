//! Interactive play command
//!
//! Text-based game loop: a random secret is drawn from the palette, the
//! player types one guess row per turn and receives the feedback pegs. Win
//! and loss detection live here, on the consumer side of the board API.

use crate::core::{Feedback, Peg, Row};
use crate::output::formatters::row_string;
use crate::session::Game;
use colored::Colorize;
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Configuration for an interactive game
pub struct PlayConfig {
    pub columns: usize,
    pub rows: usize,
    pub options: usize,
}

/// Run the interactive game against stdin/stdout
///
/// # Errors
///
/// Returns an error for an invalid configuration or an I/O failure while
/// reading input.
pub fn run_play(config: &PlayConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let mut rng = rand::rng();
    play_loop(config, &mut stdin.lock(), &mut rng, None)
}

/// The game loop, parameterized over its input source for testability
///
/// `forced_secret` bypasses the random draw; used by tests to script a
/// deterministic game.
///
/// # Errors
///
/// Returns an error for an invalid configuration or an I/O failure while
/// reading input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play_loop<R: BufRead, G: Rng>(
    config: &PlayConfig,
    reader: &mut R,
    rng: &mut G,
    forced_secret: Option<&[Peg]>,
) -> Result<(), String> {
    let palette = Peg::palette(config.options).map_err(|e| e.to_string())?;
    let mut game = Game::new(config.columns, config.rows, palette)
        .map_err(|e| e.to_string())?
        .strict(true);

    print_banner(config, game.options());

    'games: loop {
        match forced_secret {
            Some(secret) => game
                .try_set_secret(secret.to_vec())
                .map_err(|e| e.to_string())?,
            None => game.randomize_secret(rng),
        }
        debug!("secret placed, game starting");

        let mut turn = 0;
        while turn < config.rows {
            let prompt = format!("Turn {}/{}", turn + 1, config.rows);
            let Some(input) = read_input(reader, &prompt)? else {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            };

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    game.reset();
                    println!("\n🔄 New game started!\n");
                    continue 'games;
                }
                "" => continue,
                _ => {}
            }

            let pegs = match Peg::parse_sequence(&input) {
                Ok(pegs) => pegs,
                Err(err) => {
                    println!("❌ {err}\n");
                    continue;
                }
            };

            if pegs.len() != config.columns {
                println!(
                    "❌ Enter exactly {} symbols, e.g. {}\n",
                    config.columns,
                    example_guess(game.options(), config.columns)
                );
                continue;
            }

            if let Some(bad) = place_row(&mut game, turn, &pegs) {
                game.clear_row(turn);
                println!("❌ Symbol '{bad}' is not in the palette\n");
                continue;
            }

            let feedback = game.compare(turn);
            print_turn_feedback(&pegs, feedback);

            if feedback.is_some_and(|fb| fb.is_full_match(config.columns)) {
                print_win(turn + 1);
                if !ask_play_again(reader)? {
                    return Ok(());
                }
                game.reset();
                continue 'games;
            }

            turn += 1;
        }

        print_loss(game.board().secret());
        if !ask_play_again(reader)? {
            return Ok(());
        }
        game.reset();
    }
}

/// Place a full guess row; returns the first off-palette peg, if any
fn place_row(game: &mut Game<Peg>, row: usize, pegs: &[Peg]) -> Option<Peg> {
    for (column, &peg) in pegs.iter().enumerate() {
        if game.try_place(row, column, peg).is_err() {
            return Some(peg);
        }
    }
    None
}

fn print_banner(config: &PlayConfig, options: &[Peg]) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Mastermind - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let palette: String = options.iter().map(|peg| peg.as_char()).collect();
    println!(
        "I picked a secret code of {} symbols from the palette [{}].",
        config.columns,
        palette.bright_yellow()
    );
    println!(
        "You have {} attempts. After each guess you get feedback pegs:\n",
        config.rows
    );
    println!("  {} exact match (right symbol, right position)", "●".red());
    println!("  {} present elsewhere (right symbol, wrong position)\n", "○".white());
    println!("Commands: 'quit' to exit, 'new' for a fresh secret\n");
}

fn print_turn_feedback(pegs: &[Peg], feedback: Option<Feedback>) {
    let guess: String = pegs.iter().map(|peg| peg.as_char()).collect();

    match feedback {
        Some(fb) => {
            let exact = "●".repeat(fb.exact_matches());
            let present = "○".repeat(fb.present_elsewhere());
            println!(
                "   {}  {}{}  ({} exact, {} elsewhere)\n",
                guess.bright_white().bold(),
                exact.red(),
                present.white(),
                fb.exact_matches(),
                fb.present_elsewhere()
            );
        }
        None => {
            println!("   {}  (no matches)\n", guess.bright_white().bold());
        }
    }
}

fn print_win(turns: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        " 🎉  C O D E   C R A C K E D !  🎉 ".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Solved in {} {}\n",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "turn" } else { "turns" }
    );
}

fn print_loss(secret: &Row<Peg>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", " Out of attempts! ".bright_red().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  The secret was: {}\n",
        row_string(secret).bright_yellow().bold()
    );
}

fn ask_play_again<R: BufRead>(reader: &mut R) -> Result<bool, String> {
    let Some(answer) = read_input(reader, "Play again? (yes/no)")? else {
        return Ok(false);
    };
    match answer.as_str() {
        "yes" | "y" => {
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Read one trimmed, lowercased line; `None` on end of input
fn read_input<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = reader.read_line(&mut input).map_err(|e| e.to_string())?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_lowercase()))
}

fn example_guess(options: &[Peg], columns: usize) -> String {
    options
        .iter()
        .cycle()
        .take(columns)
        .map(|peg| peg.as_char())
        .collect()
}
