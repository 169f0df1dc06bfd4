//! Brute-force search with the minimum-remaining-values heuristic.

use std::time::Instant;

use crate::board::{Board, State};
use crate::candidates::CandidateSet;
use crate::coords::Coordinates;
use crate::error::SudokuError;
use crate::solver::step::Step;
use crate::{EMPTY_CELL, MAX_VALUE, MIN_VALUE, SIZE};

#[derive(Debug, Default)]
struct BacktrackStats {
    guesses: u64,
    backtracks: u64,
}

/// Solves the board outright by depth-first search.
///
/// Candidate propagation (handled by the board) prunes the search, the
/// MRV heuristic picks the most constrained cell first, and an empty cell
/// left with no candidates fails the branch immediately.
///
/// Unlike the other techniques this one does not produce an incremental
/// step: on success the solution is written directly into the caller's
/// board and the returned step is a trace record whose application is a
/// no-op. Its `removed_candidates` is the full set whenever the board
/// changed, so the solver loop registers progress.
pub fn backtracking(board: &mut Board) -> Result<Step, SudokuError> {
    if board.is_unconstrained() && board.state() == State::Invalid {
        return Err(SudokuError::CannotSolve);
    }

    let mut stats = BacktrackStats::default();
    let start = Instant::now();

    let mut working = board.clone();
    solve_recursive(&mut working, &mut stats)?;

    let elapsed = start.elapsed();
    let made_changes = working != *board;
    *board = working;

    let mut step = Step {
        technique: "Backtracking".to_string(),
        description: format!(
            "Guessed {} times.\nBacktracked {} times.\nSolved the puzzle in {} milliseconds.",
            stats.guesses,
            stats.backtracks,
            elapsed.as_millis()
        ),
        ..Step::default()
    };
    if made_changes {
        step.removed_candidates = CandidateSet::ALL;
    }

    Ok(step)
}

/// Fills the next MRV cell with each workable value in ascending order,
/// recursing until the board is solved or every branch is exhausted.
fn solve_recursive(board: &mut Board, stats: &mut BacktrackStats) -> Result<(), SudokuError> {
    let Some(coords) = find_mrv_cell(board) else {
        // No empty cells left.
        return Ok(());
    };

    for value in MIN_VALUE..=MAX_VALUE {
        if !board.is_unconstrained() && !board.cell_at(coords).contains_candidate(value) {
            continue;
        }

        board.must_set_value(coords, value);
        stats.guesses += 1;

        match board.state() {
            State::Invalid => {
                board.must_set_value(coords, EMPTY_CELL);
                stats.backtracks += 1;
            }
            State::Solved => return Ok(()),
            State::Unsolved => {
                if solve_recursive(board, stats).is_ok() {
                    return Ok(());
                }
                board.must_set_value(coords, EMPTY_CELL);
                stats.backtracks += 1;
            }
        }
    }

    Err(SudokuError::CannotSolve)
}

/// The empty cell with the fewest candidates, ties broken in row-major
/// order; a cell with a single candidate is taken immediately.
fn find_mrv_cell(board: &Board) -> Option<Coordinates> {
    let mut best: Option<(usize, Coordinates)> = None;

    for row in 0..SIZE {
        for col in 0..SIZE {
            let coords = Coordinates { row, col };
            let cell = board.cell_at(coords);
            if !cell.is_empty() {
                continue;
            }

            let count = cell.candidates().count();
            if count == 1 {
                return Some(coords);
            }
            if best.map_or(true, |(least, _)| count < least) {
                best = Some((count, coords));
            }
        }
    }

    best.map(|(_, coords)| coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solves_a_puzzle() {
        let mut board = Board::from_string(
            "081000670000007050003280000030000890708301260002800104010530040350000000890004000",
            false,
        )
        .unwrap();

        let step = backtracking(&mut board).unwrap();
        assert_eq!(step.technique, "Backtracking");
        assert_eq!(step.removed_candidates, CandidateSet::ALL);
        assert!(step.made_progress());
        assert_eq!(board.state(), State::Solved);
    }

    #[test]
    fn test_unsolvable_puzzle_exhausts() {
        let mut board = Board::from_string(
            "100900500000610080020000010600002800030000006000160020810000000000028061050001008",
            false,
        )
        .unwrap();
        let original = board.clone();

        assert_eq!(backtracking(&mut board), Err(SudokuError::CannotSolve));
        // The board is left as it was.
        assert_eq!(board, original);
    }

    #[test]
    fn test_invalid_unconstrained_board_is_rejected_early() {
        // Two 5s in the first row, preserved by the unconstrained parse.
        let mut s = String::from("55");
        s.push_str(&"0".repeat(79));
        let mut board = Board::from_string(&s, true).unwrap();

        assert_eq!(backtracking(&mut board), Err(SudokuError::CannotSolve));
    }

    #[test]
    fn test_solved_board_reports_no_changes() {
        let mut board = Board::from_string(
            "637159248281347956594268173816592734429783615375614829742936581953821467168475392",
            false,
        )
        .unwrap();
        let original = board.clone();

        let step = backtracking(&mut board).unwrap();
        assert!(!step.made_progress());
        assert_eq!(board, original);
    }

    #[test]
    fn test_mrv_prefers_most_constrained_cell() {
        let mut board = Board::new();
        // Constrain (4,4) down to two candidates; everything else has more.
        for value in 1..=7u8 {
            board.exclude_candidates_at(Coordinates { row: 4, col: 4 }, CandidateSet::singleton(value));
        }
        assert_eq!(find_mrv_cell(&board), Some(Coordinates { row: 4, col: 4 }));

        // A single-candidate cell wins outright.
        board.exclude_candidates_at(Coordinates { row: 2, col: 2 }, {
            let mut mask = CandidateSet::ALL;
            mask.remove(9);
            mask
        });
        assert_eq!(find_mrv_cell(&board), Some(Coordinates { row: 2, col: 2 }));
    }
}
