//! A single recorded deduction and its application to a board.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::candidates::CandidateSet;
use crate::error::SudokuError;
use crate::peers::PeerSet;

/// One deduction taken by a technique: which cells change, which cells
/// justify the change, and what happens to them.
///
/// A step made progress when it places a value or removes at least one
/// candidate. The affected and reason sets are kept as [`PeerSet`]s;
/// consumers needing an ordered list call [`PeerSet::to_vec`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Technique label, scope-qualified where applicable, e.g.
    /// `"HiddenSingle (Row)"`.
    pub technique: String,
    /// Human-readable account of the deduction, for explanatory UIs.
    pub description: String,
    /// Cells whose value or candidates change when the step is applied.
    pub affected_cells: PeerSet,
    /// Cells that justify the deduction.
    pub reason_cells: PeerSet,
    /// Candidates struck from every affected cell.
    pub removed_candidates: CandidateSet,
    /// Value written into every affected cell, if the step places one.
    pub placed_value: Option<u8>,
}

impl Step {
    /// Whether applying this step changes the board at all.
    pub fn made_progress(&self) -> bool {
        self.placed_value.is_some() || self.removed_candidates != CandidateSet::NONE
    }

    /// Applies this step to `board`: writes the placed value (if any) into
    /// every affected cell, then strikes the removed candidates from each.
    ///
    /// A rejected value write surfaces as
    /// [`SudokuError::UnapplicableStep`]; the step was built against a
    /// different board.
    pub fn apply_to(&self, board: &mut Board) -> Result<(), SudokuError> {
        for coords in self.affected_cells.iter() {
            if let Some(value) = self.placed_value {
                board
                    .set_value(coords, value)
                    .map_err(|_| SudokuError::UnapplicableStep)?;
            }

            if self.removed_candidates != CandidateSet::NONE {
                board.exclude_candidates_at(coords, self.removed_candidates);
            }
        }

        Ok(())
    }

    /// Applies this step to the board it was built against, returning the
    /// step for chaining.
    ///
    /// # Panics
    ///
    /// Panics when the board rejects the step; since techniques apply
    /// their own steps immediately, a failure here is a bug in technique
    /// code and invalidates any further program flow.
    pub fn must_apply_to(self, board: &mut Board) -> Step {
        if let Err(err) = self.apply_to(board) {
            panic!("step {:?} not applicable: {err}", self.technique);
        }
        self
    }
}
