//! Game session: board plus symbol palette
//!
//! A [`Game`] is the mediation layer between a frontend and the board. It
//! owns the board together with the caller-supplied option palette, forwards
//! edit intents, and can draw a random secret from the palette. The board
//! itself never sees the palette; membership checks are an opt-in strictness
//! of this layer.

use crate::core::{Board, BoardError, Cell, Feedback};
use log::debug;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// One game in progress: a board and the palette of playable symbols
#[derive(Debug, Clone)]
pub struct Game<S> {
    board: Board<S>,
    options: Vec<S>,
    strict: bool,
}

/// Error type for rejected session intents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A board-level rejection
    Board(BoardError),
    /// Strict mode: the placed symbol is not in the palette
    UnknownSymbol,
    /// A session needs at least one playable symbol
    EmptyPalette,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(err) => write!(f, "{err}"),
            Self::UnknownSymbol => write!(f, "Symbol is not in the option palette"),
            Self::EmptyPalette => write!(f, "Option palette must not be empty"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl<S: PartialEq> Game<S> {
    /// Create a session with a fresh board and the given palette
    ///
    /// # Errors
    /// Returns `GameError::EmptyPalette` for an empty palette, or the board's
    /// `InvalidDimensions` rejection for zero dimensions.
    pub fn new(columns: usize, rows: usize, options: Vec<S>) -> Result<Self, GameError> {
        if options.is_empty() {
            return Err(GameError::EmptyPalette);
        }

        Ok(Self {
            board: Board::new(columns, rows)?,
            options,
            strict: false,
        })
    }

    /// Toggle strict palette validation for placed symbols (off by default)
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The palette of playable symbols
    #[inline]
    #[must_use]
    pub fn options(&self) -> &[S] {
        &self.options
    }

    /// Read access to the underlying board
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board<S> {
        &self.board
    }

    /// Place `symbol` into the guess cell at `(row, column)`
    ///
    /// # Errors
    /// Returns `GameError::UnknownSymbol` in strict mode for a symbol outside
    /// the palette, or the board's `IndexOutOfRange` rejection.
    pub fn try_place(&mut self, row: usize, column: usize, symbol: S) -> Result<(), GameError> {
        if self.strict && !self.options.contains(&symbol) {
            return Err(GameError::UnknownSymbol);
        }

        self.board.try_set_cell(row, column, Cell::Filled(symbol))?;
        Ok(())
    }

    /// Place `symbol`, silently ignoring a rejection (legacy surface)
    pub fn place(&mut self, row: usize, column: usize, symbol: S) {
        let _ = self.try_place(row, column, symbol);
    }

    /// Empty the guess cell at `(row, column)`, silently ignoring
    /// out-of-range indices
    pub fn clear_cell(&mut self, row: usize, column: usize) {
        self.board.set_cell(row, column, Cell::Empty);
    }

    /// Empty every cell of the guess row at `row`
    pub fn clear_row(&mut self, row: usize) {
        for column in 0..self.board.columns() {
            self.board.set_cell(row, column, Cell::Empty);
        }
    }

    /// Replace the secret row
    ///
    /// # Errors
    /// Returns the board's `LengthMismatch` rejection; the prior secret is
    /// preserved.
    pub fn try_set_secret(&mut self, symbols: Vec<S>) -> Result<(), GameError> {
        self.board.try_set_secret(symbols)?;
        Ok(())
    }

    /// Replace the secret row, silently ignoring a mismatched length
    /// (legacy surface)
    pub fn set_secret(&mut self, symbols: Vec<S>) {
        self.board.set_secret(symbols);
    }

    /// Feedback for the guess row at `row`, legacy `Option` surface
    #[must_use]
    pub fn compare(&self, row: usize) -> Option<Feedback> {
        self.board.compare(row)
    }

    /// Feedback for the guess row at `row` with distinct error kinds
    ///
    /// # Errors
    /// Forwards the board's `IndexOutOfRange` / `NoMatches` classification.
    pub fn try_compare(&self, row: usize) -> Result<Feedback, GameError> {
        Ok(self.board.try_compare(row)?)
    }

    /// Discard all guesses and the secret, keeping dimensions and palette
    pub fn reset(&mut self) {
        debug!(
            "resetting game ({}x{})",
            self.board.columns(),
            self.board.row_count()
        );
        self.board.reset();
    }
}

impl<S: PartialEq + Clone> Game<S> {
    /// Fill the secret row with uniformly random picks from the palette
    pub fn randomize_secret<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // The palette is non-empty by construction, so this fills the full
        // width.
        let symbols: Vec<S> = (0..self.board.columns())
            .filter_map(|_| self.options.choose(rng).cloned())
            .collect();

        debug!("randomized secret across {} columns", symbols.len());
        self.board.set_secret(symbols);
    }
}
