//! A square bit set sized at runtime.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as a `size×size` grid packed into an unsigned integer `T`, so
//! the largest usable size is bounded by `T::BITS`.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned};
use thiserror::Error;

use crate::coordinate::Coordinate;

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitBoardError {
    /// Requested `size*size` exceeds the bit capacity of the backing integer.
    #[error("SizeTooLarge: {size}x{size} exceeds capacity of {capacity} bits")]
    SizeTooLarge { size: usize, capacity: usize },
    /// Row or column is outside `[0, size)`.
    #[error("IndexOutOfBounds: {coord:?}")]
    IndexOutOfBounds { coord: Coordinate },
}

/// A `size×size` bit set stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned,
{
    bits: T,
    size: usize,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned,
{
    /// Number of bits available in `T`.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Largest side length that fits in `T`.
    pub fn max_size() -> usize {
        let mut n = 0;
        while (n + 1) * (n + 1) <= Self::CAPACITY {
            n += 1;
        }
        n
    }

    /// Create an empty board without a capacity check. Callers must have
    /// validated `size` against [`BitBoard::max_size`].
    #[inline]
    pub fn empty(size: usize) -> Self {
        BitBoard {
            bits: T::zero(),
            size,
        }
    }

    /// Fallible constructor: `Err(SizeTooLarge)` if `size*size > CAPACITY`.
    pub fn try_new(size: usize) -> Result<Self, BitBoardError> {
        if size.checked_mul(size).map_or(true, |cells| cells > Self::CAPACITY) {
            Err(BitBoardError::SizeTooLarge {
                size,
                capacity: Self::CAPACITY,
            })
        } else {
            Ok(Self::empty(size))
        }
    }

    /// Gets the bit at `coord`.
    pub fn get(&self, coord: Coordinate) -> Result<bool, BitBoardError> {
        let idx = self.index(coord)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Like [`BitBoard::get`], but off-grid coordinates read as unset.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.get(coord).unwrap_or(false)
    }

    /// Sets the bit at `coord`.
    pub fn set(&mut self, coord: Coordinate) -> Result<(), BitBoardError> {
        let idx = self.index(coord)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Sets the bit at `coord` if it is on the grid. Returns `true` if the
    /// bit was previously unset.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let Ok(idx) = self.index(coord) else {
            return false;
        };
        let mask = T::one() << idx;
        let fresh = (self.bits & mask).is_zero();
        self.bits = self.bits | mask;
        fresh
    }

    /// Clears all bits.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn index(&self, coord: Coordinate) -> Result<usize, BitBoardError> {
        let n = self.size as i64;
        let (r, c) = (coord.row as i64, coord.col as i64);
        if r < 0 || c < 0 || r >= n || c >= n {
            Err(BitBoardError::IndexOutOfBounds { coord })
        } else {
            Ok((r * n + c) as usize)
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let bit = if ((self.bits >> (r * self.size + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Bit set used for per-board cell tracking.
pub type CellSet = BitBoard<u128>;
