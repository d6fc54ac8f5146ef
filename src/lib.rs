//! Mastermind
//!
//! A single-player code-breaking game engine: a hidden row of symbols must be
//! guessed across a fixed number of attempts, with feedback per guess
//! indicating exact and partial matches.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Board, Cell};
//!
//! // A board of 10 guess rows, 4 columns each, plus a hidden secret row
//! let mut board: Board<u8> = Board::new(4, 10).unwrap();
//! board.set_secret(vec![1, 2, 3, 4]);
//!
//! // Fill the first guess row one cell at a time
//! for (column, symbol) in [1, 3, 2, 5].into_iter().enumerate() {
//!     board.set_cell(0, column, Cell::Filled(symbol));
//! }
//!
//! // One exact match, two symbols present elsewhere
//! let feedback = board.compare(0).unwrap();
//! assert_eq!(feedback.exact_matches(), 1);
//! assert_eq!(feedback.present_elsewhere(), 2);
//! ```

// Core domain types
pub mod core;

// Game session: board plus symbol palette
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
