use alloc::vec::Vec;
use thiserror::Error;

use crate::bitboard::CellSet;

pub const DEFAULT_BOARD_SIZE: usize = 6;
pub const DEFAULT_SHIP_LENGTHS: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Ship placement attempts allowed per board, across the whole fleet.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 2000;

/// How many times a board is rebuilt from empty before placement is declared
/// impossible for the configuration.
pub const DEFAULT_MAX_BOARD_RESTARTS: usize = 1000;

/// Problems with a game configuration, detected before any placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    ZeroBoardSize,
    #[error("board size {size} exceeds the supported maximum of {max}")]
    BoardTooLarge { size: usize, max: usize },
    #[error("fleet has no ships")]
    EmptyFleet,
    #[error("ship lengths must be positive")]
    ZeroLengthShip,
    #[error("ship of length {length} does not fit on a {size}x{size} board")]
    ShipTooLong { length: usize, size: usize },
    #[error("fleet needs {cells} cells but the board only has {capacity}")]
    FleetTooLarge { cells: usize, capacity: usize },
    #[error("placement attempt budget must be positive")]
    ZeroAttemptBudget,
}

/// Everything the setup phase needs to build a pair of boards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub ship_lengths: Vec<usize>,
    pub placement_attempts: usize,
    pub max_board_restarts: usize,
}

impl GameConfig {
    /// Default fleet on a board of `board_size`.
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Total number of ship cells in the fleet.
    pub fn fleet_cells(&self) -> usize {
        self.ship_lengths.iter().sum()
    }

    /// Reject configurations that can never produce a board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.board_size;
        if size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }
        let max = CellSet::max_size();
        if size > max {
            return Err(ConfigError::BoardTooLarge { size, max });
        }
        if self.ship_lengths.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if self.ship_lengths.contains(&0) {
            return Err(ConfigError::ZeroLengthShip);
        }
        if let Some(&length) = self.ship_lengths.iter().find(|&&l| l > size) {
            return Err(ConfigError::ShipTooLong { length, size });
        }
        let cells = self.fleet_cells();
        let capacity = size * size;
        if cells > capacity {
            return Err(ConfigError::FleetTooLarge { cells, capacity });
        }
        if self.placement_attempts == 0 {
            return Err(ConfigError::ZeroAttemptBudget);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            ship_lengths: DEFAULT_SHIP_LENGTHS.to_vec(),
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            max_board_restarts: DEFAULT_MAX_BOARD_RESTARTS,
        }
    }
}
