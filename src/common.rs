//! Common types for the board: shot outcomes and board errors.

use thiserror::Error;

use crate::bitboard::BitBoardError;
use crate::coordinate::Coordinate;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot struck a ship that still has cells afloat.
    Hit,
    /// Shot struck nothing.
    Miss,
    /// Shot struck the last remaining cell of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter keeps the turn after this outcome.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by Board operations. None of them leave the board
/// partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Shot aimed outside the grid.
    #[error("shot at {0} is off the board")]
    OutOfBounds(Coordinate),
    /// Cell was already fired at, or cleared around a sunk ship.
    #[error("cell {0} has already been targeted")]
    AlreadyTargeted(Coordinate),
    /// Ship is out of bounds, overlaps another ship, or touches its buffer zone.
    #[error("ship cannot be placed there")]
    InvalidPlacement,
    /// The placement attempt budget ran out before the fleet was complete.
    #[error("fleet placement gave up after {attempts} attempts")]
    PlacementExhausted { attempts: usize },
    /// Underlying bitboard error.
    #[error(transparent)]
    BitBoard(#[from] BitBoardError),
}

impl BoardError {
    /// Errors that the acting player recovers from by choosing another target.
    pub fn is_retryable_shot(&self) -> bool {
        matches!(self, BoardError::OutOfBounds(_) | BoardError::AlreadyTargeted(_))
    }
}
