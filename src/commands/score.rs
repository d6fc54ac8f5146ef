//! Guess scoring command
//!
//! Scores a single guess against a known secret through a real board and
//! reports the feedback bag, with the diagnostic classification of an empty
//! result.

use crate::core::{Board, BoardError, Cell, Feedback, Peg};

/// Which scoring rule to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRule {
    /// Non-consuming containment rule (the game's native rule)
    Legacy,
    /// Classic Mastermind rule: each secret symbol credits at most one mark
    Consuming,
}

impl ScoreRule {
    /// Create a rule from a name string
    ///
    /// Supported names: "legacy", "consuming", "classic".
    /// Defaults to legacy if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "consuming" | "classic" => Self::Consuming,
            _ => Self::Legacy,
        }
    }

    /// The canonical name of this rule
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Consuming => "consuming",
        }
    }
}

/// Configuration for scoring a guess
pub struct ScoreConfig {
    pub secret: String,
    pub guess: String,
    pub rule: ScoreRule,
}

/// Result of scoring a guess
pub struct ScoreResult {
    pub secret: Vec<Peg>,
    pub guess: Vec<Peg>,
    pub rule: ScoreRule,
    pub feedback: Feedback,
    /// Set when the comparison genuinely earned no marks, as opposed to the
    /// query being invalid (which is an error, not a result)
    pub no_matches: bool,
}

/// Score a guess against a secret
///
/// # Errors
///
/// Returns an error if either sequence fails to parse, or if the two
/// sequences differ in length.
pub fn score_guess(config: &ScoreConfig) -> Result<ScoreResult, String> {
    let secret =
        Peg::parse_sequence(&config.secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = Peg::parse_sequence(&config.guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if guess.len() != secret.len() {
        return Err(format!(
            "Secret and guess must have the same length ({} vs {})",
            secret.len(),
            guess.len()
        ));
    }

    // One-row board: the guess occupies row 0
    let mut board: Board<Peg> = Board::new(secret.len(), 1).map_err(|e| e.to_string())?;
    board.try_set_secret(secret.clone()).map_err(|e| e.to_string())?;
    for (column, &peg) in guess.iter().enumerate() {
        board
            .try_set_cell(0, column, Cell::Filled(peg))
            .map_err(|e| e.to_string())?;
    }

    let (feedback, no_matches) = match config.rule {
        ScoreRule::Legacy => match board.try_compare(0) {
            Ok(feedback) => (feedback, false),
            Err(BoardError::NoMatches) => (Feedback::default(), true),
            Err(err) => return Err(err.to_string()),
        },
        ScoreRule::Consuming => {
            let guess_row = board
                .row(0)
                .ok_or_else(|| "Board has no guess row".to_string())?;
            let feedback = Feedback::score_consuming(guess_row, board.secret());
            let no_matches = feedback.is_empty();
            (feedback, no_matches)
        }
    };

    Ok(ScoreResult {
        secret,
        guess,
        rule: config.rule,
        feedback,
        no_matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str, guess: &str, rule: ScoreRule) -> ScoreConfig {
        ScoreConfig {
            secret: secret.to_string(),
            guess: guess.to_string(),
            rule,
        }
    }

    #[test]
    fn score_worked_example() {
        let result = score_guess(&config("1234", "1325", ScoreRule::Legacy)).unwrap();

        assert_eq!(result.feedback.exact_matches(), 1);
        assert_eq!(result.feedback.present_elsewhere(), 2);
        assert!(!result.no_matches);
    }

    #[test]
    fn score_duplicate_credit_differs_by_rule() {
        let legacy = score_guess(&config("1234", "1111", ScoreRule::Legacy)).unwrap();
        assert_eq!(legacy.feedback.exact_matches(), 1);
        assert_eq!(legacy.feedback.present_elsewhere(), 3);

        let consuming = score_guess(&config("1234", "1111", ScoreRule::Consuming)).unwrap();
        assert_eq!(consuming.feedback.exact_matches(), 1);
        assert_eq!(consuming.feedback.present_elsewhere(), 0);
    }

    #[test]
    fn score_no_matches_is_flagged_not_an_error() {
        let result = score_guess(&config("1234", "5678", ScoreRule::Legacy)).unwrap();

        assert!(result.no_matches);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn score_length_mismatch_is_an_error() {
        assert!(score_guess(&config("1234", "123", ScoreRule::Legacy)).is_err());
    }

    #[test]
    fn score_invalid_characters_are_an_error() {
        assert!(score_guess(&config("12!4", "1234", ScoreRule::Legacy)).is_err());
        assert!(score_guess(&config("1234", "12 4", ScoreRule::Legacy)).is_err());
    }

    #[test]
    fn score_letter_pegs() {
        let result = score_guess(&config("abcd", "adcb", ScoreRule::Legacy)).unwrap();

        // a and c exact, d and b present elsewhere
        assert_eq!(result.feedback.exact_matches(), 2);
        assert_eq!(result.feedback.present_elsewhere(), 2);
    }

    #[test]
    fn rule_from_name() {
        assert_eq!(ScoreRule::from_name("legacy"), ScoreRule::Legacy);
        assert_eq!(ScoreRule::from_name("consuming"), ScoreRule::Consuming);
        assert_eq!(ScoreRule::from_name("classic"), ScoreRule::Consuming);
        assert_eq!(ScoreRule::from_name("bogus"), ScoreRule::Legacy);
    }
}
