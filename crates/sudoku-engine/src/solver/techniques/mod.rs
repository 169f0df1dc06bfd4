//! The catalogue of solving techniques.
//!
//! A technique scans the board for the first applicable occurrence of its
//! pattern (in a technique-specific but deterministic order), applies the
//! resulting [`Step`] to the board it was given, and returns the step.
//! When nothing applies it returns [`SudokuError::CannotProgress`];
//! backtracking returns [`SudokuError::CannotSolve`] when it exhausts
//! every branch.

mod backtracking;
mod intersections;
mod single_digit;
mod singles;
mod subsets;

pub use backtracking::backtracking;
pub use intersections::locked_candidates;
pub use single_digit::{skyscraper, two_string_kite, x_wing};
pub use singles::{hidden_single, last_digit, naked_single};
pub use subsets::{hidden_pair, hidden_quad, hidden_triple, naked_pair, naked_quad, naked_triple};

use crate::board::Board;
use crate::error::SudokuError;
use crate::solver::step::Step;

/// A solving technique: mutates the board via the step it applies.
pub type TechniqueFn = fn(&mut Board) -> Result<Step, SudokuError>;
