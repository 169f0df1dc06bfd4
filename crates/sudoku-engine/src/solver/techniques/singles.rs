//! Single-placement techniques: a cell whose value is forced.

use crate::board::Board;
use crate::candidates::CandidateSet;
use crate::error::SudokuError;
use crate::peers::{PeerSet, Peers, Scope, ALL_SCOPES};
use crate::solver::step::Step;

/// The cell is the last open spot of some scope, so the one remaining
/// candidate must go there.
///
/// Scans cells with a single candidate and attributes the placement to
/// the first scope (row, then column, then box) whose candidate union is
/// exactly that value. Cells whose single candidate is not forced by a
/// whole scope are left for [`naked_single`].
pub fn last_digit(board: &mut Board) -> Result<Step, SudokuError> {
    let singles = Peers::all()
        .empty_cells(board)
        .containing_count_candidates(board, 1);

    for coords in singles.iter() {
        let value = board.cell_at(coords).candidates().first();
        let target = CandidateSet::singleton(value);

        for scope in ALL_SCOPES {
            let peers = Peers::of([coords]).across(&[scope]);
            if peers.with(coords).candidates(board) != target {
                continue;
            }

            let location = match scope {
                Scope::Row => coords.row,
                Scope::Column => coords.col,
                Scope::Box => coords.box_index(),
            };
            let step = Step {
                technique: format!("LastDigit ({scope})"),
                description: format!(
                    "Value {value} can only go in one place in {scope} {location}, placing a {value} at {coords}"
                ),
                affected_cells: PeerSet::NONE.with(coords),
                reason_cells: peers,
                removed_candidates: target,
                placed_value: Some(value),
            };
            return Ok(step.must_apply_to(board));
        }
    }

    Err(SudokuError::CannotProgress)
}

/// A cell with exactly one candidate left takes it.
pub fn naked_single(board: &mut Board) -> Result<Step, SudokuError> {
    let singles = Peers::all()
        .empty_cells(board)
        .containing_count_candidates(board, 1);

    for coords in singles.iter() {
        let candidates = board.cell_at(coords).candidates();
        let value = candidates.first();

        let step = Step {
            technique: "NakedSingle".to_string(),
            description: format!(
                "The candidate {value} is the only one left at {coords}, placing a {value}"
            ),
            affected_cells: PeerSet::NONE.with(coords),
            reason_cells: Peers::of([coords]).across(&ALL_SCOPES),
            removed_candidates: candidates,
            placed_value: Some(value),
        };
        return Ok(step.must_apply_to(board));
    }

    Err(SudokuError::CannotProgress)
}

/// A candidate that fits nowhere else in one of the cell's scopes must go
/// in that cell, even when the cell itself still has other candidates.
pub fn hidden_single(board: &mut Board) -> Result<Step, SudokuError> {
    for coords in Peers::all().empty_cells(board).iter() {
        let candidates = board.cell_at(coords).candidates();
        // With fewer than two candidates this is a naked single, not a
        // hidden one.
        if candidates.count() < 2 {
            continue;
        }

        for value in candidates.iter() {
            let mask = CandidateSet::singleton(value);
            let scope = [Scope::Box, Scope::Row, Scope::Column]
                .into_iter()
                .find(|&scope| {
                    Peers::of([coords])
                        .across(&[scope])
                        .containing_candidates(board, mask)
                        .is_empty()
                });
            let Some(scope) = scope else {
                continue;
            };

            let location = match scope {
                Scope::Row => coords.row,
                Scope::Column => coords.col,
                Scope::Box => coords.box_index(),
            };
            let step = Step {
                technique: format!("HiddenSingle ({scope})"),
                description: format!(
                    "In {scope} {location}, value {value} can only go in one place at {coords}, placing a {value}"
                ),
                affected_cells: PeerSet::NONE.with(coords),
                reason_cells: Peers::of([coords]).across(&[scope]),
                removed_candidates: mask,
                placed_value: Some(value),
            };
            return Ok(step.must_apply_to(board));
        }
    }

    Err(SudokuError::CannotProgress)
}
