//! Formatting utilities for terminal output

use crate::core::{Feedback, Peg, Row};

/// Format a peg sequence as its character string
#[must_use]
pub fn peg_sequence(pegs: &[Peg]) -> String {
    pegs.iter().map(|peg| peg.as_char()).collect()
}

/// Format a row of pegs, empty cells as a middle dot
#[must_use]
pub fn row_string(row: &Row<Peg>) -> String {
    row.symbols()
        .map(|symbol| symbol.map_or('·', |peg| peg.as_char()))
        .collect()
}

/// Format a feedback bag as peg characters: `●` per exact match, `○` per
/// present-elsewhere mark
#[must_use]
pub fn feedback_pegs(feedback: &Feedback) -> String {
    let mut result = String::new();
    result.push_str(&"●".repeat(feedback.exact_matches()));
    result.push_str(&"○".repeat(feedback.present_elsewhere()));
    result
}
