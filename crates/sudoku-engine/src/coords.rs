//! Board coordinates and their unit relationships.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SudokuError;
use crate::{BOX_SIZE, CELL_COUNT, SIZE};

/// A row/column pair addressing one cell of the board.
///
/// Rows and columns are 0-based, top-left origin. Cell indices run left to
/// right, top to bottom; box indices run the same way over the nine 3×3
/// boxes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinates {
    pub row: usize,
    pub col: usize,
}

impl Coordinates {
    /// Builds coordinates, rejecting rows or columns outside the board.
    pub fn new(row: usize, col: usize) -> Result<Coordinates, SudokuError> {
        if row >= SIZE || col >= SIZE {
            return Err(SudokuError::IndexOutOfBounds);
        }
        Ok(Coordinates { row, col })
    }

    /// Coordinates of the cell at the given 0-based cell index.
    pub fn from_index(index: usize) -> Result<Coordinates, SudokuError> {
        if index >= CELL_COUNT {
            return Err(SudokuError::IndexOutOfBounds);
        }
        Ok(Coordinates {
            row: index / SIZE,
            col: index % SIZE,
        })
    }

    /// Coordinates of the `pos`-th cell of box `box_index`, both in
    /// row-major order.
    pub fn from_box_index(box_index: usize, pos: usize) -> Result<Coordinates, SudokuError> {
        if box_index >= SIZE || pos >= SIZE {
            return Err(SudokuError::IndexOutOfBounds);
        }
        Ok(Coordinates {
            row: (box_index / BOX_SIZE) * BOX_SIZE + pos / BOX_SIZE,
            col: (box_index % BOX_SIZE) * BOX_SIZE + pos % BOX_SIZE,
        })
    }

    /// The 0-based cell index of these coordinates.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Which of the nine boxes these coordinates fall in.
    pub fn box_index(self) -> usize {
        (self.row / BOX_SIZE) * BOX_SIZE + self.col / BOX_SIZE
    }

    pub fn shares_row_with(self, other: Coordinates) -> bool {
        self.row == other.row
    }

    pub fn shares_column_with(self, other: Coordinates) -> bool {
        self.col == other.col
    }

    pub fn shares_box_with(self, other: Coordinates) -> bool {
        self.box_index() == other.box_index()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_bounds() {
        assert!(Coordinates::new(0, 0).is_ok());
        assert!(Coordinates::new(8, 8).is_ok());
        assert_eq!(Coordinates::new(9, 0), Err(SudokuError::IndexOutOfBounds));
        assert_eq!(Coordinates::new(0, 9), Err(SudokuError::IndexOutOfBounds));
    }

    #[test]
    fn test_from_index() {
        let c = Coordinates::from_index(54).unwrap();
        assert_eq!((c.row, c.col), (6, 0));
        assert_eq!(
            Coordinates::from_index(81),
            Err(SudokuError::IndexOutOfBounds)
        );
    }

    #[test]
    fn test_index_roundtrip() {
        for index in 0..CELL_COUNT {
            assert_eq!(Coordinates::from_index(index).unwrap().index(), index);
        }
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Coordinates::new(0, 0).unwrap().box_index(), 0);
        assert_eq!(Coordinates::new(0, 8).unwrap().box_index(), 2);
        assert_eq!(Coordinates::new(4, 4).unwrap().box_index(), 4);
        assert_eq!(Coordinates::new(8, 0).unwrap().box_index(), 6);
        assert_eq!(Coordinates::new(8, 8).unwrap().box_index(), 8);
    }

    #[test]
    fn test_from_box_index_roundtrip() {
        for box_index in 0..SIZE {
            for pos in 0..SIZE {
                let c = Coordinates::from_box_index(box_index, pos).unwrap();
                assert_eq!(c.box_index(), box_index);
            }
        }
        assert_eq!(
            Coordinates::from_box_index(9, 0),
            Err(SudokuError::IndexOutOfBounds)
        );
        assert_eq!(
            Coordinates::from_box_index(0, 9),
            Err(SudokuError::IndexOutOfBounds)
        );
    }

    #[test]
    fn test_shares_predicates() {
        let a = Coordinates::new(1, 2).unwrap();
        assert!(a.shares_row_with(Coordinates::new(1, 8).unwrap()));
        assert!(!a.shares_row_with(Coordinates::new(2, 2).unwrap()));
        assert!(a.shares_column_with(Coordinates::new(7, 2).unwrap()));
        assert!(a.shares_box_with(Coordinates::new(2, 0).unwrap()));
        assert!(!a.shares_box_with(Coordinates::new(2, 3).unwrap()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinates::new(4, 7).unwrap().to_string(), "R4C7");
    }
}
