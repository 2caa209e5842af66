//! Grid positions.

use core::fmt;

/// A (row, column) position. Zero-indexed; bounds belong to the board, so a
/// coordinate may lie anywhere, including off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by `dr` rows and `dc` columns, or `None` if either
    /// axis leaves the `i32` range.
    pub fn checked_offset(self, dr: i32, dc: i32) -> Option<Self> {
        Some(Self::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.row, c.col)
    }
}

/// One-indexed `row col`, the form a human types.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", i64::from(self.row) + 1, i64::from(self.col) + 1)
    }
}
