//! Ship geometry and damage tracking.

use core::fmt;

use crate::coordinate::Coordinate;

/// Axis a ship extends along from its bow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Each successive cell is one row further down.
    Vertical,
    /// Each successive cell is one column further right.
    Horizontal,
}

impl Orientation {
    #[inline]
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Vertical => (1, 0),
            Orientation::Horizontal => (0, 1),
        }
    }
}

/// A straight ship anchored at its bow. The occupied cells are always
/// derived from `bow`, `length` and `orientation`; only the damage counter
/// changes after construction.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    /// Create an undamaged ship. Bounds are checked by the board on placement.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        Ship {
            bow,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// Cells occupied by the ship, starting at the bow.
    ///
    /// Cells past `i32::MAX` cannot be represented, so a ship running off the
    /// end of the coordinate range yields fewer than `length` cells.
    pub fn cells(&self) -> Cells {
        let start = match self.orientation {
            Orientation::Vertical => self.bow.row,
            Orientation::Horizontal => self.bow.col,
        };
        let room = (i64::from(i32::MAX) - i64::from(start) + 1) as u64;
        Cells {
            next: self.bow,
            step: self.orientation.step(),
            left: self.length.min(usize::try_from(room).unwrap_or(usize::MAX)),
        }
    }

    /// Whether `coord` is one of the ship's cells.
    pub fn is_hit_by(&self, coord: Coordinate) -> bool {
        let (along, across, bow_along, bow_across) = match self.orientation {
            Orientation::Vertical => (coord.row, coord.col, self.bow.row, self.bow.col),
            Orientation::Horizontal => (coord.col, coord.row, self.bow.col, self.bow.row),
        };
        let d = i64::from(along) - i64::from(bow_along);
        across == bow_across && d >= 0 && (d as u64) < self.length as u64
    }

    /// Record one hit. Returns `true` if this hit sank the ship.
    pub fn register_hit(&mut self) -> bool {
        if self.remaining_hits == 0 {
            return false;
        }
        self.remaining_hits -= 1;
        self.remaining_hits == 0
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells not yet hit.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, remaining: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.remaining_hits,
        )
    }
}

/// Iterator over a ship's cells.
#[derive(Debug, Clone)]
pub struct Cells {
    next: Coordinate,
    step: (i32, i32),
    left: usize,
}

impl Iterator for Cells {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.left == 0 {
            return None;
        }
        let cur = self.next;
        self.left -= 1;
        if self.left > 0 {
            match cur.checked_offset(self.step.0, self.step.1) {
                Some(next) => self.next = next,
                None => self.left = 0,
            }
        }
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl ExactSizeIterator for Cells {}
