//! Discrete grid coordinates.
//!
//! Cells are `(row, col)` pairs stored as `i32` so that offset arithmetic
//! (evasion lookahead, neighbour enumeration) can step outside the grid
//! without wrapping; bounds are checked by the grid, not by the type.

use std::fmt;
use std::ops::Add;

/// A grid coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Signed offset that takes `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Cell) -> Delta {
        Delta::new(other.row - self.row, other.col - self.col)
    }

    /// The cell `n` steps away along `dir`.
    ///
    /// Saturates at the `i32` range, so an oversized `n` lands far off any
    /// grid instead of overflowing.
    #[inline]
    pub fn step(self, dir: Delta, n: i32) -> Cell {
        Cell::new(
            self.row.saturating_add(dir.drow.saturating_mul(n)),
            self.col.saturating_add(dir.dcol.saturating_mul(n)),
        )
    }
}

impl Add<Delta> for Cell {
    type Output = Cell;
    #[inline]
    fn add(self, rhs: Delta) -> Cell {
        self.step(rhs, 1)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Signed movement offset between two cells.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delta {
    pub drow: i32,
    pub dcol: i32,
}

impl Delta {
    pub const ZERO: Delta = Delta::new(0, 0);

    #[inline]
    pub const fn new(drow: i32, dcol: i32) -> Self {
        Self { drow, dcol }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Delta::ZERO
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.drow, self.dcol)
    }
}

/// The four cardinal unit offsets: up, down, left, right.
pub const CARDINALS: [Delta; 4] = [
    Delta::new(-1, 0),
    Delta::new(1, 0),
    Delta::new(0, -1),
    Delta::new(0, 1),
];
