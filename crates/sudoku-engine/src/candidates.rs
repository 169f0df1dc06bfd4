//! Bit-mask sets of candidate values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SudokuError;
use crate::{MAX_VALUE, MIN_VALUE};

/// A bit mask representing the possible candidate values of a cell.
///
/// Bit 0 is unused; bits 1 through 9 represent the values 1 through 9. A
/// mask of `0b00_0010_0110` therefore holds the candidates 1, 2, and 5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateSet(u16);

impl CandidateSet {
    /// The empty set.
    pub const NONE: CandidateSet = CandidateSet(0);
    /// The full set `{1..9}`.
    pub const ALL: CandidateSet = CandidateSet(0b11_1111_1110);

    /// Builds a set from the given values, rejecting anything outside
    /// `1..=9`.
    pub fn new(values: &[u8]) -> Result<CandidateSet, SudokuError> {
        let mut set = CandidateSet::NONE;
        for &value in values {
            set.add(value)?;
        }
        Ok(set)
    }

    /// The set holding exactly `value`.
    ///
    /// Only meaningful for values in `1..=9`; callers pass values obtained
    /// from iterating another set.
    pub fn singleton(value: u8) -> CandidateSet {
        debug_assert!((MIN_VALUE..=MAX_VALUE).contains(&value));
        CandidateSet(1 << value)
    }

    /// Whether `value` is in the set.
    pub fn contains(self, value: u8) -> bool {
        value <= MAX_VALUE && self.0 & (1 << value) != 0
    }

    /// Adds `value` to the set. Fails with [`SudokuError::InvalidValue`]
    /// for values outside `1..=9`.
    pub fn add(&mut self, value: u8) -> Result<(), SudokuError> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(SudokuError::InvalidValue);
        }
        self.0 |= 1 << value;
        Ok(())
    }

    /// Removes `value` from the set. Values outside the mask are ignored.
    pub fn remove(&mut self, value: u8) {
        if value <= MAX_VALUE {
            self.0 &= !(1 << value);
        }
    }

    /// Removes every candidate present in `other` from this set.
    pub fn exclude(&mut self, other: CandidateSet) {
        self.0 &= !other.0;
    }

    /// Adds every candidate present in `other` to this set.
    pub fn merge(&mut self, other: CandidateSet) {
        self.0 |= other.0;
    }

    /// The candidates present in both sets.
    pub fn intersection(self, other: CandidateSet) -> CandidateSet {
        CandidateSet(self.0 & other.0)
    }

    /// How many candidates are in the set.
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set holds no candidates.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The smallest candidate in the set, or 0 if the set is empty.
    pub fn first(self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            self.0.trailing_zeros() as u8
        }
    }

    /// Iterates the candidates in ascending order, skipping absent values
    /// by bit-scanning.
    pub fn iter(self) -> CandidateIter {
        CandidateIter(self.0)
    }

    /// All subsets of this set holding exactly `size` candidates.
    ///
    /// Enumerates "n choose k" combinations; the order is deterministic
    /// but callers must not rely on it.
    pub fn subsets(self, size: usize) -> Vec<CandidateSet> {
        if size == 0 {
            return vec![CandidateSet::NONE];
        }
        if self.count() < size {
            return Vec::new();
        }

        let first = self.first();
        let mut rest = self;
        rest.remove(first);

        // Subsets with the smallest candidate, then subsets without it.
        let mut results: Vec<CandidateSet> = rest
            .subsets(size - 1)
            .into_iter()
            .map(|mut combo| {
                combo.merge(CandidateSet::singleton(first));
                combo
            })
            .collect();
        results.extend(rest.subsets(size));
        results
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl std::ops::BitAnd for CandidateSet {
    type Output = CandidateSet;
    fn bitand(self, rhs: CandidateSet) -> CandidateSet {
        CandidateSet(self.0 & rhs.0)
    }
}

impl std::ops::BitOr for CandidateSet {
    type Output = CandidateSet;
    fn bitor(self, rhs: CandidateSet) -> CandidateSet {
        CandidateSet(self.0 | rhs.0)
    }
}

impl IntoIterator for CandidateSet {
    type Item = u8;
    type IntoIter = CandidateIter;
    fn into_iter(self) -> CandidateIter {
        self.iter()
    }
}

/// Ascending iterator over the candidates of a [`CandidateSet`].
#[derive(Debug, Clone, Copy)]
pub struct CandidateIter(u16);

impl Iterator for CandidateIter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let value = self.0.trailing_zeros() as u8;
        self.0 &= !(1 << value);
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert_eq!(CandidateSet::ALL.count(), 9);
        assert_eq!(CandidateSet::NONE.count(), 0);
        assert!(CandidateSet::NONE.is_empty());
        for value in 1..=9 {
            assert!(CandidateSet::ALL.contains(value));
        }
        assert!(!CandidateSet::ALL.contains(0));
        assert!(!CandidateSet::ALL.contains(10));
    }

    #[test]
    fn test_add_rejects_out_of_range() {
        let mut set = CandidateSet::NONE;
        assert_eq!(set.add(0), Err(SudokuError::InvalidValue));
        assert_eq!(set.add(10), Err(SudokuError::InvalidValue));
        assert!(set.is_empty());
        assert!(set.add(9).is_ok());
        assert!(set.contains(9));
    }

    #[test]
    fn test_set_algebra() {
        let mut set = CandidateSet::new(&[1, 2, 5]).unwrap();
        assert_eq!(set.count(), 3);

        set.remove(2);
        assert!(!set.contains(2));

        set.merge(CandidateSet::new(&[2, 3]).unwrap());
        assert_eq!(set, CandidateSet::new(&[1, 2, 3, 5]).unwrap());

        set.exclude(CandidateSet::new(&[1, 3]).unwrap());
        assert_eq!(set, CandidateSet::new(&[2, 5]).unwrap());

        let other = CandidateSet::new(&[5, 6]).unwrap();
        assert_eq!(set.intersection(other), CandidateSet::new(&[5]).unwrap());
        assert_eq!(set | other, CandidateSet::new(&[2, 5, 6]).unwrap());
        assert_eq!(set & other, CandidateSet::new(&[5]).unwrap());
    }

    #[test]
    fn test_first() {
        assert_eq!(CandidateSet::NONE.first(), 0);
        assert_eq!(CandidateSet::ALL.first(), 1);
        assert_eq!(CandidateSet::new(&[7, 4, 9]).unwrap().first(), 4);

        // first() always returns a member for non-empty sets.
        for value in 1..=9 {
            let set = CandidateSet::singleton(value);
            assert!(set.contains(set.first()));
        }
    }

    #[test]
    fn test_iteration_is_ascending_and_restartable() {
        let set = CandidateSet::new(&[9, 1, 4]).unwrap();
        let values: Vec<u8> = set.iter().collect();
        assert_eq!(values, vec![1, 4, 9]);

        // A second iteration sees the same values.
        assert_eq!(set.iter().count(), set.count());
        assert_eq!(set.iter().collect::<Vec<_>>(), values);
    }

    #[test]
    fn test_subsets_counts() {
        // C(popcount, k) distinct subsets, each of size k.
        let set = CandidateSet::new(&[1, 3, 5, 7, 9]).unwrap();
        let cases = [(0usize, 1usize), (1, 5), (2, 10), (3, 10), (4, 5), (5, 1), (6, 0)];
        for (size, expected) in cases {
            let subsets = set.subsets(size);
            assert_eq!(subsets.len(), expected, "size {size}");
            for subset in &subsets {
                assert_eq!(subset.count(), size);
                assert_eq!(subset.intersection(set), *subset);
            }
            // Distinctness.
            for (i, a) in subsets.iter().enumerate() {
                for b in &subsets[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_display() {
        let set = CandidateSet::new(&[5, 1, 2]).unwrap();
        assert_eq!(set.to_string(), "1,2,5");
        assert_eq!(CandidateSet::NONE.to_string(), "");
    }
}
