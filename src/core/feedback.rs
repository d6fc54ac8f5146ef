//! Guess feedback calculation and representation
//!
//! Feedback for a guess row is an unordered bag of marks in two kinds:
//! - `ExactMatch`: the symbol is equal to the secret's symbol at the same
//!   position
//! - `PresentElsewhere`: the symbol appears somewhere in the secret row, but
//!   not at this position
//!
//! Cells matching neither kind contribute nothing to the bag.
//!
//! Two scoring rules are implemented. [`Feedback::score`] is the default,
//! non-consuming rule: a `PresentElsewhere` check is plain unordered
//! containment, so a guess with a repeated symbol can earn multiple marks
//! from a single secret symbol. [`Feedback::score_consuming`] is the classic
//! Mastermind rule where every secret symbol credits at most one mark.

use super::{Cell, Row};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A single feedback mark for one guess cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Symbol equal and at the same position as in the secret
    ExactMatch,
    /// Symbol occurs somewhere in the secret, but not at this position
    PresentElsewhere,
}

/// The unordered bag of marks for one compared guess row
///
/// With only two mark kinds, the bag is fully described by its per-kind
/// counts; equality is bag equality, positions are never revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: usize,
    present: usize,
}

impl Feedback {
    /// Build a bag directly from per-kind counts
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, present: usize) -> Self {
        Self { exact, present }
    }

    /// Number of `ExactMatch` marks in the bag
    #[inline]
    #[must_use]
    pub const fn exact_matches(&self) -> usize {
        self.exact
    }

    /// Number of `PresentElsewhere` marks in the bag
    #[inline]
    #[must_use]
    pub const fn present_elsewhere(&self) -> usize {
        self.present
    }

    /// Total number of marks
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.exact + self.present
    }

    /// Check whether the bag holds no marks at all
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Check whether every one of `columns` cells was an exact match
    #[inline]
    #[must_use]
    pub const fn is_full_match(&self, columns: usize) -> bool {
        self.exact == columns
    }

    /// Iterate the individual marks of the bag, exact marks first
    ///
    /// The bag is unordered; the iteration order is an arbitrary
    /// representative.
    pub fn marks(&self) -> impl Iterator<Item = Mark> {
        std::iter::repeat_n(Mark::ExactMatch, self.exact)
            .chain(std::iter::repeat_n(Mark::PresentElsewhere, self.present))
    }

    /// Score `guess` against `secret` with the non-consuming rule
    ///
    /// For each column: equal filled symbols at the same position earn an
    /// `ExactMatch`; otherwise a filled guess symbol contained anywhere in
    /// the secret earns a `PresentElsewhere`. Containment does not consume
    /// secret symbols, so duplicated guess symbols can each earn a mark from
    /// the same secret cell. Empty guess cells earn nothing.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Feedback, Row};
    ///
    /// let secret = Row::from_symbols(vec![1, 2, 3, 4]);
    /// let guess = Row::from_symbols(vec![1, 3, 2, 5]);
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// assert_eq!(feedback.exact_matches(), 1);
    /// assert_eq!(feedback.present_elsewhere(), 2);
    /// ```
    #[must_use]
    pub fn score<S: PartialEq>(guess: &Row<S>, secret: &Row<S>) -> Self {
        let mut exact = 0;
        let mut present = 0;

        for (guess_cell, secret_cell) in guess.cells().iter().zip(secret.cells()) {
            let Cell::Filled(symbol) = guess_cell else {
                continue;
            };

            if matches!(secret_cell, Cell::Filled(target) if target == symbol) {
                exact += 1;
            } else if secret.contains(symbol) {
                present += 1;
            }
        }

        Self { exact, present }
    }

    /// Score `guess` against `secret` with the classic consuming rule
    ///
    /// Two passes: exact matches are marked first and removed from the pool
    /// of available secret symbols, then each remaining guess symbol earns a
    /// `PresentElsewhere` only while the pool still holds an unconsumed copy.
    /// A guess with a repeated symbol cannot earn more marks than the secret
    /// has copies of that symbol.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Feedback, Row};
    ///
    /// let secret = Row::from_symbols(vec![1, 2, 3, 4]);
    /// let guess = Row::from_symbols(vec![1, 1, 1, 1]);
    ///
    /// let consuming = Feedback::score_consuming(&guess, &secret);
    /// assert_eq!(consuming.exact_matches(), 1);
    /// assert_eq!(consuming.present_elsewhere(), 0);
    /// ```
    #[must_use]
    pub fn score_consuming<S: Eq + Hash>(guess: &Row<S>, secret: &Row<S>) -> Self {
        let mut available: FxHashMap<&S, usize> = FxHashMap::default();
        for cell in secret.cells() {
            if let Cell::Filled(symbol) = cell {
                *available.entry(symbol).or_insert(0) += 1;
            }
        }

        // First pass: exact position matches, removed from the pool
        let mut exact = 0;
        for (guess_cell, secret_cell) in guess.cells().iter().zip(secret.cells()) {
            if let (Cell::Filled(symbol), Cell::Filled(target)) = (guess_cell, secret_cell)
                && symbol == target
            {
                exact += 1;
                if let Some(count) = available.get_mut(symbol) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong-position matches from the remaining pool
        let mut present = 0;
        for (guess_cell, secret_cell) in guess.cells().iter().zip(secret.cells()) {
            let Cell::Filled(symbol) = guess_cell else {
                continue;
            };
            if matches!(secret_cell, Cell::Filled(target) if target == symbol) {
                continue; // Already counted as exact
            }
            if let Some(count) = available.get_mut(symbol)
                && *count > 0
            {
                present += 1;
                *count -= 1;
            }
        }

        Self { exact, present }
    }
}
