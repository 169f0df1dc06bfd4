//! Subset techniques: naked and hidden pairs, triples, and quads.

use crate::board::Board;
use crate::candidates::CandidateSet;
use crate::error::SudokuError;
use crate::peers::{Peers, ALL_SCOPES};
use crate::solver::step::Step;
use crate::SIZE;

pub fn naked_pair(board: &mut Board) -> Result<Step, SudokuError> {
    naked_multiple(board, 2, "NakedPair")
}

pub fn naked_triple(board: &mut Board) -> Result<Step, SudokuError> {
    naked_multiple(board, 3, "NakedTriple")
}

pub fn naked_quad(board: &mut Board) -> Result<Step, SudokuError> {
    naked_multiple(board, 4, "NakedQuad")
}

pub fn hidden_pair(board: &mut Board) -> Result<Step, SudokuError> {
    hidden_multiple(board, 2, "HiddenPair")
}

pub fn hidden_triple(board: &mut Board) -> Result<Step, SudokuError> {
    hidden_multiple(board, 3, "HiddenTriple")
}

pub fn hidden_quad(board: &mut Board) -> Result<Step, SudokuError> {
    hidden_multiple(board, 4, "HiddenQuad")
}

/// `count` cells of a scope whose candidates unite to exactly `count`
/// values claim those values; every other cell in the scopes the group
/// shares loses them.
fn naked_multiple(board: &mut Board, count: usize, name: &str) -> Result<Step, SudokuError> {
    for index in 0..SIZE {
        for scope in ALL_SCOPES {
            let potential = Peers::in_scope(scope, index)
                .empty_cells(board)
                .containing_max_candidates(board, count);

            if potential.count() < count {
                continue;
            }

            for combo in potential.subsets(count) {
                let candidates = combo.candidates(board);
                if candidates.count() != count {
                    continue;
                }

                let affected = Peers::of(combo)
                    .across_shared_scopes()
                    .containing_candidates(board, candidates);
                if affected.is_empty() {
                    continue;
                }

                let step = Step {
                    technique: name.to_string(),
                    description: format!(
                        "{name} found at {combo}, removing candidates {candidates} from mutual peers"
                    ),
                    affected_cells: affected,
                    reason_cells: combo,
                    removed_candidates: candidates,
                    placed_value: None,
                };
                return Ok(step.must_apply_to(board));
            }
        }
    }

    Err(SudokuError::CannotProgress)
}

/// `count` candidates of a scope that fit in only `count` of its cells
/// claim those cells; the cells lose every other candidate.
fn hidden_multiple(board: &mut Board, count: usize, name: &str) -> Result<Step, SudokuError> {
    for index in 0..SIZE {
        for scope in ALL_SCOPES {
            let empties = Peers::in_scope(scope, index).empty_cells(board);
            if empties.count() < count {
                continue;
            }

            let scope_candidates = empties.candidates(board);
            if scope_candidates.count() < count {
                continue;
            }

            for combo in scope_candidates.subsets(count) {
                let cells = empties.containing_candidates(board, combo);
                if cells.count() != count {
                    continue;
                }

                let mut removed = cells.candidates(board);
                removed.exclude(combo);
                if removed == CandidateSet::NONE {
                    continue;
                }

                let step = Step {
                    technique: name.to_string(),
                    description: format!(
                        "Candidates {combo} in {scope} {index} only fit at {cells}, striking their other candidates"
                    ),
                    affected_cells: cells,
                    // The cells that rule the combo out everywhere else.
                    reason_cells: empties.difference(cells),
                    removed_candidates: removed,
                    placed_value: None,
                };
                return Ok(step.must_apply_to(board));
            }
        }
    }

    Err(SudokuError::CannotProgress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Coordinates;
    use crate::peers::PeerSet;

    fn c(row: usize, col: usize) -> Coordinates {
        Coordinates { row, col }
    }

    #[test]
    fn test_naked_pair() {
        // (0,0) and (0,1) both hold exactly {8,9}: row 0 uses 1-5 and the
        // box sees 6 and 7 from column 0.
        let mut board = Board::from_string(
            "001234500600000000700000000000000000000000000000000000000000000000000000000000000",
            false,
        )
        .unwrap();

        let pair = PeerSet::NONE.including([c(0, 0), c(0, 1)]);
        assert_eq!(
            board.cell_at(c(0, 0)).candidates(),
            CandidateSet::new(&[8, 9]).unwrap()
        );

        let step = naked_pair(&mut board).unwrap();
        assert_eq!(step.technique, "NakedPair");
        assert_eq!(step.reason_cells, pair);
        assert_eq!(step.removed_candidates, CandidateSet::new(&[8, 9]).unwrap());
        assert_eq!(
            step.affected_cells,
            PeerSet::NONE.including([
                c(0, 7),
                c(0, 8),
                c(1, 1),
                c(1, 2),
                c(2, 1),
                c(2, 2),
            ])
        );
        assert_eq!(step.placed_value, None);

        // The pair's candidates are struck from the affected cells.
        assert!(!board.cell_at(c(0, 7)).contains_candidate(8));
        assert!(!board.cell_at(c(1, 1)).contains_candidate(9));
        // The pair itself keeps them.
        assert!(board.cell_at(c(0, 0)).contains_candidate(8));
    }

    #[test]
    fn test_naked_pair_no_progress_on_empty_board() {
        // Every cell still has all nine candidates, so no pair exists.
        let mut board = Board::new();
        assert_eq!(naked_pair(&mut board), Err(SudokuError::CannotProgress));
    }

    #[test]
    fn test_naked_triple() {
        // Row 0 uses 1-6, leaving {7,8,9} in the three open cells of box 0.
        let mut board = Board::from_string(
            "000123456000000000000000000000000000000000000000000000000000000000000000000000000",
            false,
        )
        .unwrap();

        let step = naked_triple(&mut board).unwrap();
        assert_eq!(step.technique, "NakedTriple");
        assert_eq!(
            step.reason_cells,
            PeerSet::NONE.including([c(0, 0), c(0, 1), c(0, 2)])
        );
        assert_eq!(
            step.removed_candidates,
            CandidateSet::new(&[7, 8, 9]).unwrap()
        );
        // The rest of box 0 loses the triple.
        assert_eq!(
            step.affected_cells,
            PeerSet::NONE.including([c(1, 0), c(1, 1), c(1, 2), c(2, 0), c(2, 1), c(2, 2)])
        );
    }

    #[test]
    fn test_naked_quad() {
        // Row 0 uses 1-4; box 0 and column 3 exclude 5 from the first four
        // open cells, leaving a {6,7,8,9} quad that strips (0,8).
        let mut board = Board::from_string(
            "000012340500000000000000000000000000000500000000000000000000000000000000000000000",
            false,
        )
        .unwrap();

        let step = naked_quad(&mut board).unwrap();
        assert_eq!(step.technique, "NakedQuad");
        assert_eq!(
            step.reason_cells,
            PeerSet::NONE.including([c(0, 0), c(0, 1), c(0, 2), c(0, 3)])
        );
        assert_eq!(step.affected_cells, PeerSet::NONE.with(c(0, 8)));
        assert_eq!(
            step.removed_candidates,
            CandidateSet::new(&[6, 7, 8, 9]).unwrap()
        );
        assert_eq!(
            board.cell_at(c(0, 8)).candidates(),
            CandidateSet::new(&[5]).unwrap()
        );
    }

    #[test]
    fn test_hidden_pair() {
        // 1 and 2 are stripped from every row-0 cell except (0,0) and
        // (0,1), which keep all nine candidates.
        let mut board = Board::from_string(
            "000000000000012000000000120000000000001000000002000000000000000000000000000000000",
            false,
        )
        .unwrap();

        let step = hidden_pair(&mut board).unwrap();
        assert_eq!(step.technique, "HiddenPair");
        assert_eq!(
            step.affected_cells,
            PeerSet::NONE.including([c(0, 0), c(0, 1)])
        );
        assert_eq!(
            step.removed_candidates,
            CandidateSet::new(&[3, 4, 5, 6, 7, 8, 9]).unwrap()
        );

        for coords in [c(0, 0), c(0, 1)] {
            assert_eq!(
                board.cell_at(coords).candidates(),
                CandidateSet::new(&[1, 2]).unwrap()
            );
        }
    }

    #[test]
    fn test_hidden_triple() {
        // 1, 2, and 3 fit only in the first three cells of row 0.
        let mut board = Board::from_string(
            "000000000000123000000000123000000000000000000000000000000000000000000000000000000",
            false,
        )
        .unwrap();

        let step = hidden_triple(&mut board).unwrap();
        assert_eq!(step.technique, "HiddenTriple");
        assert_eq!(
            step.affected_cells,
            PeerSet::NONE.including([c(0, 0), c(0, 1), c(0, 2)])
        );
        assert_eq!(
            step.removed_candidates,
            CandidateSet::new(&[4, 5, 6, 7, 8, 9]).unwrap()
        );
    }

    #[test]
    fn test_hidden_subsets_no_progress_on_empty_board() {
        let mut board = Board::new();
        assert_eq!(hidden_pair(&mut board), Err(SudokuError::CannotProgress));
        assert_eq!(hidden_triple(&mut board), Err(SudokuError::CannotProgress));
        assert_eq!(hidden_quad(&mut board), Err(SudokuError::CannotProgress));
        assert_eq!(naked_quad(&mut board), Err(SudokuError::CannotProgress));
    }
}
