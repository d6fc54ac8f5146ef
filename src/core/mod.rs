//! Core domain types for the code-breaking game
//!
//! This module contains the fundamental domain types: cells, rows, the board,
//! and feedback scoring. All types here are pure, in-memory, and free of I/O.

mod board;
mod cell;
mod feedback;
mod peg;
mod row;

pub use board::{Board, BoardError};
pub use cell::Cell;
pub use feedback::{Feedback, Mark};
pub use peg::{MAX_PALETTE, Peg, PegError};
pub use row::Row;
