//! Intersection techniques: eliminations from candidates locked into the
//! overlap of two scopes.

use crate::board::Board;
use crate::candidates::CandidateSet;
use crate::error::SudokuError;
use crate::peers::{Peers, Scope};
use crate::solver::step::Step;
use crate::SIZE;

/// A candidate whose spots in a row or column all fall inside one box is
/// locked there; the rest of the box loses it.
pub fn locked_candidates(board: &mut Board) -> Result<Step, SudokuError> {
    let relevant = Peers::all().empty_cells(board);
    let candidates = relevant.candidates(board);

    for candidate in candidates.iter() {
        let mask = CandidateSet::singleton(candidate);

        for scope in [Scope::Row, Scope::Column] {
            for index in 0..SIZE {
                let peers = Peers::in_scope(scope, index).containing_candidates(board, mask);

                if !(2..=3).contains(&peers.count()) {
                    continue;
                }
                if !peers.share_scope(Scope::Box) {
                    continue;
                }

                let affected = Peers::of(peers)
                    .across_shared_scopes()
                    .containing_candidates(board, mask);
                if affected.is_empty() {
                    continue;
                }

                let step = Step {
                    technique: format!("LockedCandidates ({scope})"),
                    description: format!(
                        "Candidate {candidate} in {scope} {index} is locked to its box, removing it from the box's other cells"
                    ),
                    affected_cells: affected,
                    reason_cells: peers,
                    removed_candidates: mask,
                    placed_value: None,
                };
                return Ok(step.must_apply_to(board));
            }
        }
    }

    Err(SudokuError::CannotProgress)
}
