//! The game board: guess grid plus secret row
//!
//! A `Board` owns a fixed grid of guess rows and one hidden secret row of the
//! same width. The mutation surface comes in two flavors per operation:
//!
//! - a `try_` method that reports exactly why nothing happened
//!   ([`BoardError::IndexOutOfRange`], [`BoardError::LengthMismatch`],
//!   [`BoardError::NoMatches`]), and
//! - a legacy method that silently ignores invalid input.
//!
//! The legacy `compare` deliberately collapses "row index out of range" and
//! "no matches at all" into the same absent result; callers that need to
//! tell the two apart use [`Board::try_compare`].

use super::{Cell, Feedback, Row};
use std::fmt;

/// The full state of one game: guess rows and the secret row
///
/// Rows are owned exclusively by the board; accessors hand out shared
/// references only, so no caller can alias or resize a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<S> {
    columns: usize,
    rows: Vec<Row<S>>,
    secret: Row<S>,
}

/// Error type for rejected board operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board construction with a zero dimension
    InvalidDimensions { columns: usize, rows: usize },
    /// A row or column index outside the board
    IndexOutOfRange { index: usize, limit: usize },
    /// A secret assignment whose length differs from the column count
    LengthMismatch { expected: usize, actual: usize },
    /// A comparison that produced no marks of any kind
    NoMatches,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { columns, rows } => {
                write!(f, "Board dimensions must be at least 1x1, got {columns}x{rows}")
            }
            Self::IndexOutOfRange { index, limit } => {
                write!(f, "Index {index} is out of range (limit {limit})")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Expected a sequence of length {expected}, got {actual}")
            }
            Self::NoMatches => write!(f, "Comparison produced no matches"),
        }
    }
}

impl std::error::Error for BoardError {}

impl<S: PartialEq> Board<S> {
    /// Create a board with `rows` empty guess rows of width `columns` and an
    /// empty secret row of the same width
    ///
    /// # Errors
    /// Returns `BoardError::InvalidDimensions` if either dimension is zero.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Board;
    ///
    /// let board: Board<u8> = Board::new(4, 10).unwrap();
    /// assert_eq!(board.columns(), 4);
    /// assert_eq!(board.row_count(), 10);
    ///
    /// assert!(Board::<u8>::new(0, 10).is_err());
    /// ```
    pub fn new(columns: usize, rows: usize) -> Result<Self, BoardError> {
        if columns == 0 || rows == 0 {
            return Err(BoardError::InvalidDimensions { columns, rows });
        }

        let mut guess_rows = Vec::with_capacity(rows);
        guess_rows.resize_with(rows, || Row::empty(columns));

        Ok(Self {
            columns,
            rows: guess_rows,
            secret: Row::empty(columns),
        })
    }

    /// The fixed column count (width of every row)
    #[inline]
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// The fixed number of guess rows
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All guess rows, in order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row<S>] {
        &self.rows
    }

    /// The guess row at `index`, or `None` if out of range
    #[inline]
    pub fn row(&self, index: usize) -> Option<&Row<S>> {
        self.rows.get(index)
    }

    /// The secret row
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Row<S> {
        &self.secret
    }

    /// Replace the secret row's contents
    ///
    /// # Errors
    /// Returns `BoardError::LengthMismatch` when `symbols.len()` differs from
    /// the column count; the prior secret is preserved.
    pub fn try_set_secret(&mut self, symbols: Vec<S>) -> Result<(), BoardError> {
        if symbols.len() != self.columns {
            return Err(BoardError::LengthMismatch {
                expected: self.columns,
                actual: symbols.len(),
            });
        }

        self.secret.fill(symbols);
        Ok(())
    }

    /// Replace the secret row's contents, silently ignoring a mismatched
    /// length (legacy surface)
    pub fn set_secret(&mut self, symbols: Vec<S>) {
        let _ = self.try_set_secret(symbols);
    }

    /// Write `cell` at `(row, column)`
    ///
    /// Clearing a cell is writing `Cell::Empty`.
    ///
    /// # Errors
    /// Returns `BoardError::IndexOutOfRange` when either index is outside the
    /// board; no cell is touched.
    pub fn try_set_cell(
        &mut self,
        row: usize,
        column: usize,
        cell: Cell<S>,
    ) -> Result<(), BoardError> {
        let limit = self.rows.len();
        let Some(guess_row) = self.rows.get_mut(row) else {
            return Err(BoardError::IndexOutOfRange { index: row, limit });
        };

        if guess_row.set(column, cell) {
            Ok(())
        } else {
            Err(BoardError::IndexOutOfRange {
                index: column,
                limit: self.columns,
            })
        }
    }

    /// Write `cell` at `(row, column)`, silently ignoring out-of-range
    /// indices (legacy surface)
    pub fn set_cell(&mut self, row: usize, column: usize, cell: Cell<S>) {
        let _ = self.try_set_cell(row, column, cell);
    }

    /// Compute feedback for the guess row at `row` against the secret
    ///
    /// Scoring uses the non-consuming rule of [`Feedback::score`].
    ///
    /// # Errors
    /// Returns `BoardError::IndexOutOfRange` for an out-of-range row index,
    /// or `BoardError::NoMatches` when the guess earns no marks of any kind.
    pub fn try_compare(&self, row: usize) -> Result<Feedback, BoardError> {
        let guess_row = self.rows.get(row).ok_or(BoardError::IndexOutOfRange {
            index: row,
            limit: self.rows.len(),
        })?;

        let feedback = Feedback::score(guess_row, &self.secret);
        if feedback.is_empty() {
            return Err(BoardError::NoMatches);
        }

        Ok(feedback)
    }

    /// Compute feedback for the guess row at `row`, collapsing both "row out
    /// of range" and "no matches" into `None` (legacy surface)
    ///
    /// The conflation is deliberate; callers that need to tell the two cases
    /// apart use [`Board::try_compare`].
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Board, Cell};
    ///
    /// let mut board: Board<u8> = Board::new(4, 10).unwrap();
    /// board.set_secret(vec![1, 2, 3, 4]);
    /// for (column, symbol) in [1, 3, 2, 5].into_iter().enumerate() {
    ///     board.set_cell(0, column, Cell::Filled(symbol));
    /// }
    ///
    /// let feedback = board.compare(0).unwrap();
    /// assert_eq!(feedback.exact_matches(), 1);
    /// assert_eq!(feedback.present_elsewhere(), 2);
    ///
    /// assert!(board.compare(99).is_none());
    /// ```
    #[must_use]
    pub fn compare(&self, row: usize) -> Option<Feedback> {
        self.try_compare(row).ok()
    }

    /// Discard every guess and the secret, keeping the dimensions
    ///
    /// Observably identical to swapping in a freshly constructed board of the
    /// same dimensions.
    pub fn reset(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
        self.secret.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_board() -> Board<u8> {
        let mut board = Board::new(4, 10).unwrap();
        board.set_secret(vec![1, 2, 3, 4]);
        board
    }

    fn place_guess(board: &mut Board<u8>, row: usize, symbols: &[u8]) {
        for (column, &symbol) in symbols.iter().enumerate() {
            board.set_cell(row, column, Cell::Filled(symbol));
        }
    }

    #[test]
    fn fresh_board_is_fully_unset() {
        let board: Board<u8> = Board::new(4, 10).unwrap();

        assert_eq!(board.columns(), 4);
        assert_eq!(board.row_count(), 10);
        assert!(board.rows().iter().all(Row::is_unset));
        assert!(board.rows().iter().all(|row| row.width() == 4));
        assert!(board.secret().is_unset());
        assert_eq!(board.secret().width(), 4);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Board::<u8>::new(0, 10),
            Err(BoardError::InvalidDimensions {
                columns: 0,
                rows: 10
            })
        );
        assert_eq!(
            Board::<u8>::new(4, 0),
            Err(BoardError::InvalidDimensions { columns: 4, rows: 0 })
        );
        assert!(Board::<u8>::new(1, 1).is_ok());
    }

    #[test]
    fn set_secret_with_matching_length_replaces_contents() {
        let mut board: Board<u8> = Board::new(4, 10).unwrap();
        board.set_secret(vec![1, 2, 3, 4]);

        assert!(board.secret().is_full());
        let symbols: Vec<Option<&u8>> = board.secret().symbols().collect();
        assert_eq!(symbols, vec![Some(&1), Some(&2), Some(&3), Some(&4)]);
    }

    #[test]
    fn set_secret_with_wrong_length_is_a_no_op() {
        let mut board = filled_board();
        let before = board.clone();

        board.set_secret(vec![9, 9, 9]);
        assert_eq!(board, before);

        board.set_secret(vec![9, 9, 9, 9, 9]);
        assert_eq!(board, before);
    }

    #[test]
    fn try_set_secret_reports_length_mismatch() {
        let mut board = filled_board();

        assert_eq!(
            board.try_set_secret(vec![9, 9, 9]),
            Err(BoardError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        // Prior secret preserved
        assert!(board.secret().contains(&1));
    }

    #[test]
    fn set_cell_in_range_touches_only_that_cell() {
        let mut board: Board<u8> = Board::new(4, 10).unwrap();
        board.set_cell(2, 3, Cell::Filled(7));

        for (row_index, row) in board.rows().iter().enumerate() {
            for (column_index, cell) in row.cells().iter().enumerate() {
                if (row_index, column_index) == (2, 3) {
                    assert_eq!(cell, &Cell::Filled(7));
                } else {
                    assert!(cell.is_empty());
                }
            }
        }
    }

    #[test]
    fn set_cell_out_of_range_leaves_board_unchanged() {
        let mut board = filled_board();
        place_guess(&mut board, 0, &[1, 2, 3, 4]);
        let before = board.clone();

        board.set_cell(10, 0, Cell::Filled(9));
        board.set_cell(0, 4, Cell::Filled(9));
        board.set_cell(99, 99, Cell::Filled(9));

        assert_eq!(board, before);
    }

    #[test]
    fn try_set_cell_reports_index_out_of_range() {
        let mut board: Board<u8> = Board::new(4, 10).unwrap();

        assert_eq!(
            board.try_set_cell(10, 0, Cell::Filled(9)),
            Err(BoardError::IndexOutOfRange {
                index: 10,
                limit: 10
            })
        );
        assert_eq!(
            board.try_set_cell(0, 4, Cell::Filled(9)),
            Err(BoardError::IndexOutOfRange { index: 4, limit: 4 })
        );
    }

    #[test]
    fn set_cell_can_clear_a_cell() {
        let mut board: Board<u8> = Board::new(4, 10).unwrap();
        board.set_cell(1, 1, Cell::Filled(5));
        board.set_cell(1, 1, Cell::Empty);

        assert!(board.rows()[1].is_unset());
    }

    #[test]
    fn compare_worked_example() {
        let mut board = filled_board();
        place_guess(&mut board, 0, &[1, 3, 2, 5]);

        let feedback = board.compare(0).unwrap();
        assert_eq!(feedback.exact_matches(), 1);
        assert_eq!(feedback.present_elsewhere(), 2);
    }

    #[test]
    fn compare_duplicate_credit() {
        let mut board = filled_board();
        place_guess(&mut board, 0, &[1, 1, 1, 1]);

        let feedback = board.compare(0).unwrap();
        assert_eq!(feedback.exact_matches(), 1);
        assert_eq!(feedback.present_elsewhere(), 3);
    }

    #[test]
    fn compare_out_of_range_and_no_matches_both_absent() {
        let mut board = filled_board();
        place_guess(&mut board, 0, &[5, 6, 7, 8]);

        // The legacy surface cannot tell these two cases apart
        assert_eq!(board.compare(10), None);
        assert_eq!(board.compare(0), None);
    }

    #[test]
    fn try_compare_distinguishes_error_kinds() {
        let mut board = filled_board();
        place_guess(&mut board, 0, &[5, 6, 7, 8]);

        assert_eq!(
            board.try_compare(10),
            Err(BoardError::IndexOutOfRange {
                index: 10,
                limit: 10
            })
        );
        assert_eq!(board.try_compare(0), Err(BoardError::NoMatches));
    }

    #[test]
    fn compare_empty_guess_row_is_absent() {
        let board = filled_board();
        assert_eq!(board.compare(0), None);
        assert_eq!(board.try_compare(0), Err(BoardError::NoMatches));
    }

    #[test]
    fn compare_full_match() {
        let mut board = filled_board();
        place_guess(&mut board, 3, &[1, 2, 3, 4]);

        let feedback = board.compare(3).unwrap();
        assert!(feedback.is_full_match(board.columns()));
    }

    #[test]
    fn reset_keeps_dimensions_and_clears_everything() {
        let mut board = filled_board();
        place_guess(&mut board, 0, &[1, 3, 2, 5]);
        place_guess(&mut board, 5, &[4, 4, 4, 4]);

        board.reset();

        assert_eq!(board.columns(), 4);
        assert_eq!(board.row_count(), 10);
        assert!(board.rows().iter().all(Row::is_unset));
        assert!(board.secret().is_unset());

        // Equivalent to a freshly constructed board
        assert_eq!(board, Board::new(4, 10).unwrap());
    }

    #[test]
    fn error_display_messages() {
        assert_eq!(
            BoardError::LengthMismatch {
                expected: 4,
                actual: 3
            }
            .to_string(),
            "Expected a sequence of length 4, got 3"
        );
        assert_eq!(
            BoardError::IndexOutOfRange { index: 9, limit: 4 }.to_string(),
            "Index 9 is out of range (limit 4)"
        );
        assert_eq!(
            BoardError::NoMatches.to_string(),
            "Comparison produced no matches"
        );
    }
}
