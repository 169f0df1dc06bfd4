//! Bit-mask sets of board coordinates and the peer-query algebra.
//!
//! Techniques are written almost entirely in this algebra: start from an
//! origin ([`Peers::all`], [`Peers::in_scope`], [`Peers::of`]), expand
//! across scopes, then filter against a board. Every combinator is pure
//! and returns a new set; the sets are small and fixed-size, so
//! evaluation is eager.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::candidates::CandidateSet;
use crate::coords::Coordinates;
use crate::{BOX_SIZE, SIZE};

/// A unit type: row, column, or box. Also known as a "house".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Row,
    Column,
    Box,
}

/// Every scope, in the order techniques scan them.
pub const ALL_SCOPES: [Scope; 3] = [Scope::Row, Scope::Column, Scope::Box];

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::Row => "Row",
            Scope::Column => "Column",
            Scope::Box => "Box",
        };
        f.write_str(name)
    }
}

const FULL_ROW: u16 = 0b1_1111_1111;

/// A set of board coordinates, one 9-bit mask per row.
///
/// `PeerSet([0b101, 0, ..])` holds the coordinates R0C0 and R0C2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeerSet([u16; SIZE]);

/// Entry point for building [`PeerSet`]s from coordinates and scopes.
pub struct Peers;

impl Peers {
    /// Every coordinate on the board.
    pub fn all() -> PeerSet {
        PeerSet::ALL
    }

    /// No coordinates.
    pub fn empty() -> PeerSet {
        PeerSet::NONE
    }

    /// All nine coordinates of the given row, column, or box.
    pub fn in_scope(scope: Scope, index: usize) -> PeerSet {
        debug_assert!(index < SIZE);
        let mut ps = PeerSet::NONE;

        match scope {
            Scope::Row => ps.0[index] = FULL_ROW,
            Scope::Column => {
                for row in 0..SIZE {
                    ps.0[row] |= 1 << index;
                }
            }
            Scope::Box => {
                let box_row = (index / BOX_SIZE) * BOX_SIZE;
                let box_col = (index % BOX_SIZE) * BOX_SIZE;
                for row in box_row..box_row + BOX_SIZE {
                    ps.0[row] |= 0b111 << box_col;
                }
            }
        }

        ps
    }

    /// Starts building a peer set from the given seed coordinates; finish
    /// with [`WithCoordinates::across`] or
    /// [`WithCoordinates::across_shared_scopes`].
    pub fn of<I>(coords: I) -> WithCoordinates
    where
        I: IntoIterator<Item = Coordinates>,
    {
        WithCoordinates {
            coords: coords.into_iter().collect(),
        }
    }
}

/// Seed coordinates awaiting an expansion stage.
pub struct WithCoordinates {
    coords: Vec<Coordinates>,
}

impl WithCoordinates {
    /// The union, over every seed, of that seed's peers in the given
    /// scopes. The seeds themselves are always excluded.
    pub fn across(&self, scopes: &[Scope]) -> PeerSet {
        let mut ps = PeerSet::NONE;

        for &c in &self.coords {
            for &scope in scopes {
                let index = match scope {
                    Scope::Row => c.row,
                    Scope::Column => c.col,
                    Scope::Box => c.box_index(),
                };
                ps = ps.union(Peers::in_scope(scope, index));
            }
        }

        ps.excluding(self.coords.iter().copied())
    }

    /// Like [`WithCoordinates::across`], restricted to the scopes every
    /// seed shares.
    pub fn across_shared_scopes(&self) -> PeerSet {
        self.across(&shared_scopes_of(&self.coords))
    }
}

/// The scopes that every coordinate shares with the first one.
pub fn shared_scopes_of(coords: &[Coordinates]) -> Vec<Scope> {
    let Some((&first, rest)) = coords.split_first() else {
        return Vec::new();
    };

    let checks: [(Scope, fn(Coordinates, Coordinates) -> bool); 3] = [
        (Scope::Row, Coordinates::shares_row_with),
        (Scope::Column, Coordinates::shares_column_with),
        (Scope::Box, Coordinates::shares_box_with),
    ];

    checks
        .into_iter()
        .filter(|(_, shares)| rest.iter().all(|&c| shares(first, c)))
        .map(|(scope, _)| scope)
        .collect()
}

impl PeerSet {
    /// The empty set.
    pub const NONE: PeerSet = PeerSet([0; SIZE]);
    /// The set of all 81 coordinates.
    pub const ALL: PeerSet = PeerSet([FULL_ROW; SIZE]);

    /// Whether the set contains `coords`.
    pub fn contains(self, coords: Coordinates) -> bool {
        self.0[coords.row] & (1 << coords.col) != 0
    }

    /// A copy of this set with `coords` added.
    pub fn with(self, coords: Coordinates) -> PeerSet {
        let mut result = self;
        result.0[coords.row] |= 1 << coords.col;
        result
    }

    /// A copy of this set with `coords` removed.
    pub fn without(self, coords: Coordinates) -> PeerSet {
        let mut result = self;
        result.0[coords.row] &= !(1 << coords.col);
        result
    }

    /// A copy of this set with every given coordinate added.
    pub fn including<I>(self, coords: I) -> PeerSet
    where
        I: IntoIterator<Item = Coordinates>,
    {
        coords.into_iter().fold(self, PeerSet::with)
    }

    /// A copy of this set with every given coordinate removed.
    pub fn excluding<I>(self, coords: I) -> PeerSet
    where
        I: IntoIterator<Item = Coordinates>,
    {
        coords.into_iter().fold(self, PeerSet::without)
    }

    /// The coordinates present in either set.
    pub fn union(self, other: PeerSet) -> PeerSet {
        let mut result = PeerSet::NONE;
        for row in 0..SIZE {
            result.0[row] = self.0[row] | other.0[row];
        }
        result
    }

    /// The coordinates present in both sets.
    pub fn intersection(self, other: PeerSet) -> PeerSet {
        let mut result = PeerSet::NONE;
        for row in 0..SIZE {
            result.0[row] = self.0[row] & other.0[row];
        }
        result
    }

    /// The coordinates present in this set but not in `other`.
    pub fn difference(self, other: PeerSet) -> PeerSet {
        let mut result = PeerSet::NONE;
        for row in 0..SIZE {
            result.0[row] = self.0[row] & !other.0[row];
        }
        result
    }

    /// Whether the set holds no coordinates.
    pub fn is_empty(self) -> bool {
        self == PeerSet::NONE
    }

    /// How many coordinates are in the set.
    pub fn count(self) -> usize {
        self.0.iter().map(|row| row.count_ones() as usize).sum()
    }

    /// Iterates the members in row-major order, bit-scanning past absent
    /// cells.
    pub fn iter(self) -> PeerSetIter {
        PeerSetIter { rows: self.0, row: 0 }
    }

    /// Materializes the members as an ordered (row-major) list.
    pub fn to_vec(self) -> Vec<Coordinates> {
        self.iter().collect()
    }

    /// All subsets of this set holding exactly `size` members.
    pub fn subsets(self, size: usize) -> Vec<PeerSet> {
        combinations(&self.to_vec(), size)
    }

    /// Whether all members share the given row, column, or box.
    pub fn share_scope(self, scope: Scope) -> bool {
        shared_scopes_of(&self.to_vec()).contains(&scope)
    }

    /// Filters to the cells that are empty on `board`.
    pub fn empty_cells(self, board: &Board) -> PeerSet {
        self.filter(|c| board.cell_at(c).is_empty())
    }

    /// Filters to the cells whose candidates intersect `candidates`.
    pub fn containing_candidates(self, board: &Board, candidates: CandidateSet) -> PeerSet {
        self.filter(|c| !board.cell_at(c).candidates().intersection(candidates).is_empty())
    }

    /// Filters to the cells whose candidates are disjoint from
    /// `candidates`. Filled cells always qualify.
    pub fn not_containing_candidates(self, board: &Board, candidates: CandidateSet) -> PeerSet {
        self.filter(|c| board.cell_at(c).candidates().intersection(candidates).is_empty())
    }

    /// Filters to the cells whose candidate set equals `candidates`.
    pub fn containing_exact_candidates(self, board: &Board, candidates: CandidateSet) -> PeerSet {
        self.filter(|c| board.cell_at(c).candidates() == candidates)
    }

    /// Filters to the cells with between 1 and `max` candidates.
    pub fn containing_max_candidates(self, board: &Board, max: usize) -> PeerSet {
        self.filter(|c| {
            let count = board.cell_at(c).candidates().count();
            count >= 1 && count <= max
        })
    }

    /// Filters to the cells with exactly `count` candidates.
    pub fn containing_count_candidates(self, board: &Board, count: usize) -> PeerSet {
        self.filter(|c| board.cell_at(c).candidates().count() == count)
    }

    /// Filters to the cells whose value is one of `values`.
    pub fn containing_values(self, board: &Board, values: &[u8]) -> PeerSet {
        let mut value_set = CandidateSet::NONE;
        for &value in values {
            let _ = value_set.add(value);
        }
        self.filter(|c| value_set.contains(board.cell_at(c).value()))
    }

    /// The union of the candidate sets of the member cells.
    pub fn candidates(self, board: &Board) -> CandidateSet {
        let mut seen = CandidateSet::NONE;
        for c in self.iter() {
            seen.merge(board.cell_at(c).candidates());
        }
        seen
    }

    fn filter<F>(self, mut keep: F) -> PeerSet
    where
        F: FnMut(Coordinates) -> bool,
    {
        let mut result = PeerSet::NONE;
        for c in self.iter() {
            if keep(c) {
                result = result.with(c);
            }
        }
        result
    }
}

impl fmt::Display for PeerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl IntoIterator for PeerSet {
    type Item = Coordinates;
    type IntoIter = PeerSetIter;
    fn into_iter(self) -> PeerSetIter {
        self.iter()
    }
}

/// Row-major iterator over the members of a [`PeerSet`].
#[derive(Debug, Clone, Copy)]
pub struct PeerSetIter {
    rows: [u16; SIZE],
    row: usize,
}

impl Iterator for PeerSetIter {
    type Item = Coordinates;

    fn next(&mut self) -> Option<Coordinates> {
        while self.row < SIZE {
            let mask = self.rows[self.row];
            if mask == 0 {
                self.row += 1;
                continue;
            }
            let col = mask.trailing_zeros() as usize;
            self.rows[self.row] &= !(1 << col);
            return Some(Coordinates { row: self.row, col });
        }
        None
    }
}

/// All size-`size` combinations of `members`, each as a [`PeerSet`].
fn combinations(members: &[Coordinates], size: usize) -> Vec<PeerSet> {
    if size == 0 {
        return vec![PeerSet::NONE];
    }
    let Some((&first, rest)) = members.split_first() else {
        return Vec::new();
    };
    if members.len() < size {
        return Vec::new();
    }

    let mut results: Vec<PeerSet> = combinations(rest, size - 1)
        .into_iter()
        .map(|ps| ps.with(first))
        .collect();
    results.extend(combinations(rest, size));
    results
}
