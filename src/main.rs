//! Mastermind - CLI
//!
//! Code-breaking game with interactive play, one-shot guess scoring, and
//! batch simulation.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{
        PlayConfig, ScoreConfig, ScoreRule, SimulateConfig, run_play, run_simulation,
        score_guess,
    },
    output::{print_score_result, print_simulation_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game: play, score guesses, or simulate",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Code length (number of columns)
    #[arg(short, long, global = true, default_value_t = 4)]
    columns: usize,

    /// Number of guess rows (attempts)
    #[arg(short, long, global = true, default_value_t = 10)]
    rows: usize,

    /// Palette size (number of distinct symbols, max 35)
    #[arg(short = 'o', long, global = true, default_value_t = 6)]
    options: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game against a random secret (default)
    Play,

    /// Score a guess against a known secret
    Score {
        /// The secret sequence, e.g. 1234
        #[arg(short, long)]
        secret: String,

        /// The guess sequence, e.g. 1352
        #[arg(short, long)]
        guess: String,

        /// Scoring rule: legacy (default, non-consuming) or consuming
        #[arg(long, default_value = "legacy")]
        rule: String,
    },

    /// Play many random games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let config = PlayConfig {
                columns: cli.columns,
                rows: cli.rows,
                options: cli.options,
            };
            run_play(&config).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score {
            secret,
            guess,
            rule,
        } => {
            let config = ScoreConfig {
                secret,
                guess,
                rule: ScoreRule::from_name(&rule),
            };
            let result = score_guess(&config).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Simulate { count } => {
            let config = SimulateConfig {
                games: count,
                columns: cli.columns,
                rows: cli.rows,
                options: cli.options,
            };
            println!("Running {count} random games...");
            let result = run_simulation(&config).map_err(|e| anyhow::anyhow!(e))?;
            print_simulation_result(&result);
            Ok(())
        }
    }
}
