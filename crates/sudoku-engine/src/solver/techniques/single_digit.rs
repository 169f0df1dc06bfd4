//! Single-digit patterns: eliminations built from lines that hold a
//! candidate in exactly two cells.

use crate::board::Board;
use crate::candidates::CandidateSet;
use crate::coords::Coordinates;
use crate::error::SudokuError;
use crate::peers::{Peers, Scope, ALL_SCOPES};
use crate::solver::step::Step;
use crate::{MAX_VALUE, MIN_VALUE, SIZE};

/// Two parallel lines whose spots for a candidate are two apiece and
/// aligned form a rectangle; the candidate cannot appear elsewhere on the
/// two crossing lines.
pub fn x_wing(board: &mut Board) -> Result<Step, SudokuError> {
    for value in MIN_VALUE..=MAX_VALUE {
        let mask = CandidateSet::singleton(value);

        for scope in [Scope::Row, Scope::Column] {
            for a in 0..SIZE - 1 {
                let base_a = Peers::in_scope(scope, a).containing_candidates(board, mask);
                if base_a.count() != 2 {
                    continue;
                }

                for b in a + 1..SIZE {
                    let base_b = Peers::in_scope(scope, b).containing_candidates(board, mask);
                    if base_b.count() != 2 {
                        continue;
                    }

                    let cells_a = base_a.to_vec();
                    let cells_b = base_b.to_vec();
                    let a_pos = [cross_pos(scope, cells_a[0]), cross_pos(scope, cells_a[1])];
                    let b_pos = [cross_pos(scope, cells_b[0]), cross_pos(scope, cells_b[1])];
                    if a_pos != b_pos {
                        continue;
                    }

                    let cross = cross_scope(scope);
                    let corners = base_a.union(base_b);
                    let affected = Peers::in_scope(cross, a_pos[0])
                        .union(Peers::in_scope(cross, a_pos[1]))
                        .difference(corners)
                        .containing_candidates(board, mask);
                    if affected.is_empty() {
                        continue;
                    }

                    let step = Step {
                        technique: format!("XWing ({scope})"),
                        description: format!(
                            "An X-Wing on value {value} locks {scope}s {a} and {b}, removing {value} from the crossing lines"
                        ),
                        affected_cells: affected,
                        reason_cells: corners,
                        removed_candidates: mask,
                        placed_value: None,
                    };
                    return Ok(step.must_apply_to(board));
                }
            }
        }
    }

    Err(SudokuError::CannotProgress)
}

/// Two parallel lines hold a candidate twice each and share one of the
/// spots' cross line (the base); one of the two roof cells must take the
/// candidate, so anything seeing both roofs loses it.
pub fn skyscraper(board: &mut Board) -> Result<Step, SudokuError> {
    for value in MIN_VALUE..=MAX_VALUE {
        let mask = CandidateSet::singleton(value);

        for scope in [Scope::Row, Scope::Column] {
            for a in 0..SIZE - 1 {
                let line_a = Peers::in_scope(scope, a).containing_candidates(board, mask);
                if line_a.count() != 2 {
                    continue;
                }

                for b in a + 1..SIZE {
                    let line_b = Peers::in_scope(scope, b).containing_candidates(board, mask);
                    if line_b.count() != 2 {
                        continue;
                    }

                    let cells_a = line_a.to_vec();
                    let cells_b = line_b.to_vec();
                    let a_pos = [cross_pos(scope, cells_a[0]), cross_pos(scope, cells_a[1])];
                    let b_pos = [cross_pos(scope, cells_b[0]), cross_pos(scope, cells_b[1])];

                    // Exactly one shared cross line: the base of the
                    // skyscraper. Two shared lines would be an X-Wing.
                    let common: Vec<usize> =
                        a_pos.iter().filter(|p| b_pos.contains(p)).copied().collect();
                    if common.len() != 1 {
                        continue;
                    }
                    let base = common[0];

                    let roof_a = if a_pos[0] == base { cells_a[1] } else { cells_a[0] };
                    let roof_b = if b_pos[0] == base { cells_b[1] } else { cells_b[0] };

                    let affected = Peers::of([roof_a])
                        .across(&ALL_SCOPES)
                        .intersection(Peers::of([roof_b]).across(&ALL_SCOPES))
                        .containing_candidates(board, mask);
                    if affected.is_empty() {
                        continue;
                    }

                    let step = Step {
                        technique: "Skyscraper".to_string(),
                        description: format!(
                            "A skyscraper on value {value} in {scope}s {a} and {b} puts it at {roof_a} or {roof_b}, removing {value} from cells seeing both"
                        ),
                        affected_cells: affected,
                        reason_cells: line_a.union(line_b),
                        removed_candidates: mask,
                        placed_value: None,
                    };
                    return Ok(step.must_apply_to(board));
                }
            }
        }
    }

    Err(SudokuError::CannotProgress)
}

/// A row and a column each hold a candidate twice, with one spot of each
/// sharing a box; the far ends of the two strings trap the candidate, so
/// any cell seeing both loses it.
pub fn two_string_kite(board: &mut Board) -> Result<Step, SudokuError> {
    for value in MIN_VALUE..=MAX_VALUE {
        let mask = CandidateSet::singleton(value);

        for row in 0..SIZE {
            let row_line = Peers::in_scope(Scope::Row, row).containing_candidates(board, mask);
            if row_line.count() != 2 {
                continue;
            }
            let row_cells = row_line.to_vec();

            for col in 0..SIZE {
                let col_line =
                    Peers::in_scope(Scope::Column, col).containing_candidates(board, mask);
                if col_line.count() != 2 {
                    continue;
                }
                let col_cells = col_line.to_vec();

                for (i, &rc) in row_cells.iter().enumerate() {
                    for (j, &cc) in col_cells.iter().enumerate() {
                        if rc == cc || !rc.shares_box_with(cc) {
                            continue;
                        }

                        let far_row = row_cells[1 - i];
                        let far_col = col_cells[1 - j];

                        let affected = Peers::of([far_row])
                            .across(&ALL_SCOPES)
                            .intersection(Peers::of([far_col]).across(&ALL_SCOPES))
                            .containing_candidates(board, mask);
                        if affected.is_empty() {
                            continue;
                        }

                        let step = Step {
                            technique: "TwoStringKite".to_string(),
                            description: format!(
                                "A two-string kite on value {value} links Row {row} and Column {col} through a box, removing {value} from cells seeing {far_row} and {far_col}"
                            ),
                            affected_cells: affected,
                            reason_cells: row_line.union(col_line),
                            removed_candidates: mask,
                            placed_value: None,
                        };
                        return Ok(step.must_apply_to(board));
                    }
                }
            }
        }
    }

    Err(SudokuError::CannotProgress)
}

/// The position of a cell along the direction crossing `scope`.
fn cross_pos(scope: Scope, coords: Coordinates) -> usize {
    match scope {
        Scope::Row => coords.col,
        _ => coords.row,
    }
}

fn cross_scope(scope: Scope) -> Scope {
    match scope {
        Scope::Row => Scope::Column,
        _ => Scope::Row,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peers::PeerSet;

    fn c(row: usize, col: usize) -> Coordinates {
        Coordinates { row, col }
    }

    #[test]
    fn test_x_wing_rows() {
        // Candidate 1 appears in rows 0 and 4 only at columns 2 and 6.
        let mut board = Board::new();
        let one = CandidateSet::new(&[1]).unwrap();
        for row in [0, 4] {
            for col in 0..SIZE {
                if col != 2 && col != 6 {
                    board.exclude_candidates_at(c(row, col), one);
                }
            }
        }

        let step = x_wing(&mut board).unwrap();
        assert_eq!(step.technique, "XWing (Row)");
        assert_eq!(step.removed_candidates, one);
        assert_eq!(
            step.reason_cells,
            PeerSet::NONE.including([c(0, 2), c(0, 6), c(4, 2), c(4, 6)])
        );
        // Both crossing columns lose the candidate outside the corners.
        assert_eq!(step.affected_cells.count(), 14);
        assert!(!board.cell_at(c(7, 2)).contains_candidate(1));
        assert!(!board.cell_at(c(1, 6)).contains_candidate(1));
        assert!(board.cell_at(c(0, 2)).contains_candidate(1));
    }

    #[test]
    fn test_skyscraper_rows() {
        // Candidate 1 sits at {2,6} in row 0 and {2,7} in row 4: a shared
        // base in column 2, roofs at (0,6) and (4,7).
        let mut board = Board::new();
        let one = CandidateSet::new(&[1]).unwrap();
        for col in 0..SIZE {
            if col != 2 && col != 6 {
                board.exclude_candidates_at(c(0, col), one);
            }
            if col != 2 && col != 7 {
                board.exclude_candidates_at(c(4, col), one);
            }
        }

        let step = skyscraper(&mut board).unwrap();
        assert_eq!(step.technique, "Skyscraper");
        assert_eq!(step.removed_candidates, one);
        assert_eq!(
            step.reason_cells,
            PeerSet::NONE.including([c(0, 2), c(0, 6), c(4, 2), c(4, 7)])
        );
        // Exactly the cells seeing both roofs still holding the candidate.
        assert_eq!(
            step.affected_cells,
            PeerSet::NONE.including([c(1, 7), c(2, 7), c(3, 6), c(5, 6)])
        );
        assert!(!board.cell_at(c(3, 6)).contains_candidate(1));
        assert!(board.cell_at(c(0, 6)).contains_candidate(1));
    }

    #[test]
    fn test_two_string_kite() {
        // Candidate 1 sits at {2,7} in row 2 and {0,6} in column 0; the
        // string ends (2,2) and (0,0) share box 0.
        let mut board = Board::new();
        let one = CandidateSet::new(&[1]).unwrap();
        for col in 0..SIZE {
            if col != 2 && col != 7 {
                board.exclude_candidates_at(c(2, col), one);
            }
        }
        for row in 0..SIZE {
            if row != 0 && row != 6 {
                board.exclude_candidates_at(c(row, 0), one);
            }
        }

        let step = two_string_kite(&mut board).unwrap();
        assert_eq!(step.technique, "TwoStringKite");
        assert_eq!(step.removed_candidates, one);
        assert_eq!(
            step.reason_cells,
            PeerSet::NONE.including([c(2, 2), c(2, 7), c(0, 0), c(6, 0)])
        );
        // The crossing of the two far ends is the only elimination.
        assert_eq!(step.affected_cells, PeerSet::NONE.with(c(6, 7)));
        assert!(!board.cell_at(c(6, 7)).contains_candidate(1));
    }

    #[test]
    fn test_no_progress_on_empty_board() {
        let mut board = Board::new();
        assert_eq!(x_wing(&mut board), Err(SudokuError::CannotProgress));
        assert_eq!(skyscraper(&mut board), Err(SudokuError::CannotProgress));
        assert_eq!(
            two_string_kite(&mut board),
            Err(SudokuError::CannotProgress)
        );
    }
}
