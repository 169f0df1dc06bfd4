//! The solver orchestrator: runs techniques to a fixed point and records
//! the step trace.

pub mod techniques;

mod step;

pub use step::Step;

use crate::board::{Board, State};
use crate::error::SudokuError;
use techniques::TechniqueFn;

/// Outcome of a solve attempt: the final board (solved, or as far as the
/// techniques could take it), the ordered deduction trace, and the
/// verdict.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub board: Board,
    pub steps: Vec<Step>,
    /// `None` when the board ended up solved, otherwise
    /// [`SudokuError::Unsolvable`].
    pub error: Option<SudokuError>,
}

impl SolveReport {
    /// Whether the solve ended with a solved board.
    pub fn is_solved(&self) -> bool {
        self.error.is_none()
    }
}

/// A Sudoku solver driven by an ordered list of techniques.
///
/// Each pass invokes the techniques cheapest-first; the first one to make
/// progress wins the pass and the loop restarts from the top, so cheap
/// deductions unlocked by an expensive one are picked up immediately.
pub struct Solver {
    techniques: Vec<TechniqueFn>,
}

impl Solver {
    /// A solver over the given techniques, tried in order.
    pub fn with_techniques(techniques: Vec<TechniqueFn>) -> Solver {
        Solver { techniques }
    }

    /// The logical solver: human-recognizable deduction techniques,
    /// cheapest first, without guessing.
    pub fn logical() -> Solver {
        Solver::with_techniques(vec![
            techniques::last_digit,
            techniques::naked_single,
            techniques::hidden_single,
            techniques::naked_pair,
            techniques::hidden_pair,
            techniques::locked_candidates,
            techniques::naked_triple,
            techniques::hidden_triple,
            techniques::naked_quad,
            techniques::hidden_quad,
            techniques::x_wing,
            techniques::skyscraper,
            techniques::two_string_kite,
        ])
    }

    /// The brute-force solver: backtracking only.
    pub fn brute_force() -> Solver {
        Solver::with_techniques(vec![techniques::backtracking])
    }

    /// Runs the techniques to a fixed point on a copy of `puzzle` and
    /// reports the result. The caller's board is left untouched.
    pub fn solve(&self, puzzle: &Board) -> SolveReport {
        let mut board = puzzle.clone();
        let mut steps = Vec::new();

        loop {
            let mut progressed = false;

            for technique in &self.techniques {
                match technique(&mut board) {
                    Ok(step) if step.made_progress() => {
                        steps.push(step);
                        progressed = true;
                        break;
                    }
                    // A technique with nothing to offer; try the next one.
                    Ok(_) | Err(_) => {}
                }
            }

            if !progressed {
                break;
            }
        }

        let error = match board.state() {
            State::Solved => None,
            _ => Some(SudokuError::Unsolvable),
        };

        SolveReport {
            board,
            steps,
            error,
        }
    }

    /// Applies the first progress-making technique to a copy of `puzzle`
    /// and returns the updated board with the step taken, or
    /// [`SudokuError::Unsolvable`] when nothing applies.
    pub fn take_a_step(&self, puzzle: &Board) -> Result<(Board, Step), SudokuError> {
        let mut board = puzzle.clone();

        for technique in &self.techniques {
            match technique(&mut board) {
                Ok(step) if step.made_progress() => return Ok((board, step)),
                Ok(_) | Err(_) => {}
            }
        }

        Err(SudokuError::Unsolvable)
    }
}
