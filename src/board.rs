//! Board state: fleet placement, shot resolution and the render grid.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::CellSet;
use crate::common::{BoardError, ShotOutcome};
use crate::config::DEFAULT_BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// Offsets covering a cell and its eight neighbours.
const NEIGHBOURHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// What a renderer should draw in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Known empty because it borders a sunk ship.
    Cleared,
}

/// One player's grid and fleet.
///
/// Placement and play track occupancy in two separate sets: `reserved` holds
/// ship cells and their buffer zone, `targeted` holds every cell fired at or
/// cleared around a sunk ship.
#[derive(Clone)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
    reserved: CellSet,
    targeted: CellSet,
    ships: Vec<Ship>,
    destroyed: usize,
    hidden: bool,
}

impl Board {
    /// Create an empty `size×size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let reserved = CellSet::try_new(size)?;
        Ok(Board {
            size,
            cells: alloc::vec![CellState::Empty; size * size],
            reserved,
            targeted: reserved,
            ships: Vec::new(),
            destroyed: 0,
            hidden: false,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether ship cells should be drawn as empty water.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Fleet in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships sunk so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.len() - self.destroyed
    }

    /// True iff `coord` lies outside `[0, size)` on either axis.
    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        let n = self.size as i64;
        let (r, c) = (coord.row as i64, coord.col as i64);
        !(0 <= r && r < n && 0 <= c && c < n)
    }

    /// Render state of `coord`, or `None` off the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Whether `coord` is a ship cell or in a ship's buffer zone.
    pub fn is_reserved(&self, coord: Coordinate) -> bool {
        self.reserved.contains(coord)
    }

    /// Whether a shot at `coord` would be rejected as a repeat.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.targeted.contains(coord)
    }

    /// In-bounds cells that can still be fired at, row-major.
    pub fn untargeted_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let n = self.size as i32;
        (0..n)
            .flat_map(move |r| (0..n).map(move |c| Coordinate::new(r, c)))
            .filter(move |c| !self.targeted.contains(*c))
    }

    /// Mark the 3×3 neighbourhood of every cell of `ship`.
    ///
    /// With `mark_visible == false` the cells are reserved so later ships
    /// cannot touch this one. With `mark_visible == true` they join the
    /// targeting memory and are drawn as cleared; this is how a sunk ship
    /// reveals its perimeter. Cells already in the chosen set are left alone.
    pub fn compute_adjacency(&mut self, ship: &Ship, mark_visible: bool) {
        for cell in ship.cells() {
            for (dr, dc) in NEIGHBOURHOOD {
                let Some(cur) = cell.checked_offset(dr, dc) else {
                    continue;
                };
                let Some(idx) = self.index(cur) else {
                    continue;
                };
                let set = if mark_visible {
                    &mut self.targeted
                } else {
                    &mut self.reserved
                };
                if set.insert(cur) && mark_visible {
                    self.cells[idx] = CellState::Cleared;
                }
            }
        }
    }

    /// Place `ship`, reserving its cells and buffer zone.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship.length() == 0
            || ship.length() > self.size
            || ship.cells().len() < ship.length()
        {
            return Err(BoardError::InvalidPlacement);
        }
        if ship
            .cells()
            .any(|c| self.is_out_of_bounds(c) || self.reserved.contains(c))
        {
            return Err(BoardError::InvalidPlacement);
        }
        for c in ship.cells() {
            if let Some(idx) = self.index(c) {
                self.cells[idx] = CellState::Ship;
            }
            self.reserved.set(c)?;
        }
        self.ships.push(ship);
        self.compute_adjacency(&ship, false);
        log::trace!("placed {:?}", ship);
        Ok(())
    }

    /// Forget every targeted cell. Marks the switch from placement to play.
    pub fn reset_targeting_memory(&mut self) {
        self.targeted.clear_all();
    }

    /// Fire at `coord`.
    pub fn shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        let Some(idx) = self.index(coord) else {
            return Err(BoardError::OutOfBounds(coord));
        };
        if self.targeted.contains(coord) {
            return Err(BoardError::AlreadyTargeted(coord));
        }
        self.targeted.set(coord)?;

        let Some(pos) = self.ships.iter().position(|s| s.is_hit_by(coord)) else {
            self.cells[idx] = CellState::Miss;
            log::trace!("shot at ({}, {}) missed", coord.row, coord.col);
            return Ok(ShotOutcome::Miss);
        };

        self.cells[idx] = CellState::Hit;
        if self.ships[pos].register_hit() {
            self.destroyed += 1;
            let ship = self.ships[pos];
            self.compute_adjacency(&ship, true);
            log::debug!(
                "ship {:?} sunk, {} of {} destroyed",
                ship,
                self.destroyed,
                self.ships.len()
            );
            Ok(ShotOutcome::Sunk)
        } else {
            Ok(ShotOutcome::Hit)
        }
    }

    /// True once every ship has been sunk.
    pub fn is_defeated(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    #[inline]
    fn index(&self, coord: Coordinate) -> Option<usize> {
        if self.is_out_of_bounds(coord) {
            None
        } else {
            Some(coord.row as usize * self.size + coord.col as usize)
        }
    }
}

impl Default for Board {
    /// Empty board of the default size.
    fn default() -> Self {
        let reserved = CellSet::empty(DEFAULT_BOARD_SIZE);
        Board {
            size: DEFAULT_BOARD_SIZE,
            cells: alloc::vec![CellState::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
            reserved,
            targeted: reserved,
            ships: Vec::new(),
            destroyed: 0,
            hidden: false,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  reserved: {:?},\n  targeted: {:?},\n  destroyed: {},\n  ships: {:?}\n}}",
            self.size, self.reserved, self.targeted, self.destroyed, self.ships
        )
    }
}
