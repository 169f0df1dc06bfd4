//! The 9×9 board: cells, constraint propagation, state classification,
//! and the line string format.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::candidates::CandidateSet;
use crate::cell::Cell;
use crate::coords::Coordinates;
use crate::error::SudokuError;
use crate::{BOX_SIZE, CANDIDATE_PREFIX, CELL_COUNT, EMPTY_CELL, MAX_VALUE, SIZE};

/// Classification of a board's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    /// Some row, column, or box contains a duplicate value, or (under
    /// enforced constraints) some empty cell has no candidates left.
    Invalid,
    /// Valid, but at least one cell is still empty.
    Unsolved,
    /// Every row, column, and box contains each of 1..9 exactly once.
    Solved,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Invalid => "Invalid",
            State::Unsolved => "Unsolved",
            State::Solved => "Solved",
        };
        f.write_str(name)
    }
}

/// A 9×9 Sudoku board.
///
/// Unless the board was created unconstrained, every value write keeps the
/// candidate sets exact: placing a value strikes it from the candidates of
/// every peer, and clearing a cell rederives all empty-cell candidates
/// from scratch. Techniques rely on that invariant and reason purely over
/// candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
    enforces_constraints: bool,
}

impl Board {
    /// An empty board with full candidates everywhere, constraints
    /// enforced.
    pub fn new() -> Board {
        Board {
            cells: [[Cell::new(); SIZE]; SIZE],
            enforces_constraints: true,
        }
    }

    /// An empty board that performs raw writes only.
    ///
    /// Used when populating a board from an external source that may not
    /// adhere to the Sudoku rules, for diagnostic purposes.
    pub fn new_unconstrained() -> Board {
        Board {
            enforces_constraints: false,
            ..Board::new()
        }
    }

    /// Whether this board was created without constraint enforcement.
    pub fn is_unconstrained(&self) -> bool {
        !self.enforces_constraints
    }

    /// Parses a board from its line format: 81 cells left to right, top to
    /// bottom, one digit each (`0` = empty), empty cells optionally
    /// followed by `_`-prefixed candidate digits.
    ///
    /// With `unconstrained` set, values that violate the Sudoku rules are
    /// preserved verbatim and candidate annotations are applied as
    /// recorded; otherwise candidates are rederived by propagation and a
    /// rule-violating value fails with [`SudokuError::ValueNotACandidate`].
    pub fn from_string(s: &str, unconstrained: bool) -> Result<Board, SudokuError> {
        let parsed = parse_cells(s)?;

        let mut board = if unconstrained {
            Board::new_unconstrained()
        } else {
            Board::new()
        };

        for (index, cell) in parsed.iter().enumerate() {
            if cell.value != EMPTY_CELL {
                board.set_value(Coordinates::from_index(index)?, cell.value)?;
            }
        }

        if unconstrained {
            for (index, cell) in parsed.iter().enumerate() {
                if cell.value == EMPTY_CELL {
                    if let Some(candidates) = cell.candidates {
                        let c = Coordinates::from_index(index)?;
                        board.cells[c.row][c.col].candidates = candidates;
                    }
                }
            }
        }

        Ok(board)
    }

    /// Emits the board in the line format accepted by [`Board::from_string`].
    /// With `with_candidates` set, every empty cell is followed by its
    /// candidates, each prefixed with `_`.
    pub fn to_board_string(&self, with_candidates: bool) -> String {
        let mut s = String::with_capacity(CELL_COUNT);

        for row in 0..SIZE {
            for col in 0..SIZE {
                let cell = self.cells[row][col];
                s.push(char::from(b'0' + cell.value));

                if with_candidates && cell.value == EMPTY_CELL {
                    for value in cell.candidates.iter() {
                        s.push(CANDIDATE_PREFIX);
                        s.push(char::from(b'0' + value));
                    }
                }
            }
        }

        s
    }

    /// Writes `value` (0 clears the cell) at `coords`.
    ///
    /// Fails with [`SudokuError::InvalidValue`] or
    /// [`SudokuError::IndexOutOfBounds`] on bad input, and with
    /// [`SudokuError::ValueNotACandidate`] when constraints are enforced
    /// and the cell no longer permits `value`. On success under enforced
    /// constraints, placing a value propagates it out of every peer's
    /// candidates, and clearing a cell rederives all empty-cell candidates.
    pub fn set_value(&mut self, coords: Coordinates, value: u8) -> Result<(), SudokuError> {
        if value > MAX_VALUE {
            return Err(SudokuError::InvalidValue);
        }
        if coords.row >= SIZE || coords.col >= SIZE {
            return Err(SudokuError::IndexOutOfBounds);
        }
        if self.enforces_constraints
            && value != EMPTY_CELL
            && !self.cells[coords.row][coords.col].contains_candidate(value)
        {
            return Err(SudokuError::ValueNotACandidate);
        }

        self.cells[coords.row][coords.col].value = value;

        if !self.enforces_constraints {
            return Ok(());
        }

        if value == EMPTY_CELL {
            self.cells[coords.row][coords.col].candidates = CandidateSet::ALL;
            self.recalculate_candidates();
        } else {
            self.cells[coords.row][coords.col].candidates = CandidateSet::NONE;
            self.propagate_constraints(coords, value);
        }

        Ok(())
    }

    /// Writes `value` at the cell with the given 0-based index.
    pub fn set_value_at_index(&mut self, index: usize, value: u8) -> Result<(), SudokuError> {
        self.set_value(Coordinates::from_index(index)?, value)
    }

    /// Like [`Board::set_value`], for callers that guarantee the
    /// coordinates and value are valid.
    ///
    /// # Panics
    ///
    /// Panics when the write is rejected; that indicates a serious bug in
    /// the caller.
    pub fn must_set_value(&mut self, coords: Coordinates, value: u8) {
        if let Err(err) = self.set_value(coords, value) {
            panic!("set_value({coords}, {value}) rejected: {err}");
        }
    }

    /// The value at the cell with the given 0-based index.
    pub fn value_at_index(&self, index: usize) -> Result<u8, SudokuError> {
        Ok(self.cell_at(Coordinates::from_index(index)?).value())
    }

    /// The cell at the given coordinates.
    pub fn cell_at(&self, coords: Coordinates) -> Cell {
        self.cells[coords.row][coords.col]
    }

    /// Unconditionally strikes the given candidates from the cell at
    /// `coords`. This is how techniques record eliminations; no value is
    /// written.
    pub fn exclude_candidates_at(&mut self, coords: Coordinates, candidates: CandidateSet) {
        self.cells[coords.row][coords.col].candidates.exclude(candidates);
    }

    /// Classifies the board as [`State::Invalid`], [`State::Unsolved`], or
    /// [`State::Solved`] in a single pass over per-row, per-column, and
    /// per-box value sets.
    pub fn state(&self) -> State {
        let mut rows = [CandidateSet::NONE; SIZE];
        let mut cols = [CandidateSet::NONE; SIZE];
        let mut boxes = [CandidateSet::NONE; SIZE];

        for row in 0..SIZE {
            for col in 0..SIZE {
                let cell = self.cells[row][col];
                let box_index = (row / BOX_SIZE) * BOX_SIZE + col / BOX_SIZE;

                if cell.value == EMPTY_CELL {
                    if cell.candidates == CandidateSet::NONE && self.enforces_constraints {
                        return State::Invalid;
                    }
                    continue;
                }

                if rows[row].contains(cell.value)
                    || cols[col].contains(cell.value)
                    || boxes[box_index].contains(cell.value)
                {
                    return State::Invalid;
                }

                let _ = rows[row].add(cell.value);
                let _ = cols[col].add(cell.value);
                let _ = boxes[box_index].add(cell.value);
            }
        }

        for i in 0..SIZE {
            if rows[i] & cols[i] & boxes[i] != CandidateSet::ALL {
                return State::Unsolved;
            }
        }

        State::Solved
    }

    /// Strikes `value` from the candidates of every cell in the same row,
    /// column, and box as `coords`.
    fn propagate_constraints(&mut self, coords: Coordinates, value: u8) {
        let box_row = (coords.row / BOX_SIZE) * BOX_SIZE;
        let box_col = (coords.col / BOX_SIZE) * BOX_SIZE;

        for i in 0..SIZE {
            self.cells[coords.row][i].candidates.remove(value);
            self.cells[i][coords.col].candidates.remove(value);
            self.cells[box_row + i / BOX_SIZE][box_col + i % BOX_SIZE]
                .candidates
                .remove(value);
        }
    }

    /// Rederives every empty cell's candidates from the values currently
    /// on the board.
    fn recalculate_candidates(&mut self) {
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col].value == EMPTY_CELL {
                    self.cells[row][col].candidates = CandidateSet::ALL;
                }
            }
        }

        for row in 0..SIZE {
            for col in 0..SIZE {
                let value = self.cells[row][col].value;
                if value != EMPTY_CELL {
                    self.propagate_constraints(Coordinates { row, col }, value);
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

/// One parsed cell of the line format.
struct ParsedCell {
    value: u8,
    /// Candidate annotations trailing an empty cell, if any were present.
    candidates: Option<CandidateSet>,
}

/// Splits the line format into 81 parsed cells, validating structure and
/// characters but not Sudoku rules.
fn parse_cells(s: &str) -> Result<Vec<ParsedCell>, SudokuError> {
    let mut cells: Vec<ParsedCell> = Vec::with_capacity(CELL_COUNT);
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == CANDIDATE_PREFIX {
            // An annotation may only follow an empty cell.
            return Err(SudokuError::InvalidStringRep);
        }
        let value = match ch.to_digit(10) {
            Some(d) => d as u8,
            None => return Err(SudokuError::InvalidRuneInStringRep),
        };

        let mut candidates = None;
        if value == EMPTY_CELL {
            while chars.peek() == Some(&CANDIDATE_PREFIX) {
                chars.next();
                let digit = match chars.next() {
                    Some(d) => d,
                    None => return Err(SudokuError::InvalidStringRep),
                };
                let candidate = match digit.to_digit(10) {
                    Some(d) => d as u8,
                    None => return Err(SudokuError::InvalidRuneInStringRep),
                };
                let set = candidates.get_or_insert(CandidateSet::NONE);
                set.add(candidate)
                    .map_err(|_| SudokuError::InvalidRuneInStringRep)?;
            }
        }

        cells.push(ParsedCell { value, candidates });
    }

    if cells.len() != CELL_COUNT {
        return Err(SudokuError::InvalidStringRep);
    }

    Ok(cells)
}
