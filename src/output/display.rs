//! Display functions for command results

use super::formatters::{feedback_pegs, peg_sequence};
use crate::commands::{ScoreResult, SimulationResult};
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} vs {} ",
        "SCORING:".bright_cyan().bold(),
        peg_sequence(&result.guess).bright_yellow().bold(),
        peg_sequence(&result.secret).bright_white().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Rule:              {}", result.rule.name());
    println!(
        "   Exact matches:     {}",
        result.feedback.exact_matches().to_string().red().bold()
    );
    println!(
        "   Present elsewhere: {}",
        result.feedback.present_elsewhere().to_string().white().bold()
    );

    if result.no_matches {
        println!("\n{}", "   No matches of any kind".yellow());
    } else {
        println!("\n   Pegs: {}", feedback_pegs(&result.feedback));
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Wins:             {} ({})",
        result.wins.to_string().green(),
        format!("{:.1}%", result.win_rate * 100.0).bright_yellow().bold()
    );
    println!("   Losses:           {}", result.losses.to_string().yellow());
    if result.wins > 0 {
        println!(
            "   Avg turns to win: {}",
            format!("{:.2}", result.average_turns_to_win)
                .bright_yellow()
                .bold()
        );
    }
    println!(
        "   Avg marks/guess:  {:.2} exact, {:.2} elsewhere",
        result.average_exact_per_guess, result.average_present_per_guess
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if !result.turn_distribution.is_empty() {
        println!("\n📈 {}", "Winning turn distribution:".bright_cyan().bold());
        let mut turns: Vec<usize> = result.turn_distribution.keys().copied().collect();
        turns.sort_unstable();

        for turn in turns {
            if let Some(&count) = result.turn_distribution.get(&turn) {
                let pct = (count as f64 / result.total_games as f64) * 100.0;
                let bar_width = (pct / 2.5) as usize;
                let bar = format!(
                    "{}{}",
                    "█".repeat(bar_width).green(),
                    "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
                );
                println!("   {turn:2}: {bar} {count:4} ({pct:5.1}%)");
            }
        }
    }
}
