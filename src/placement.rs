//! Random fleet placement.
//!
//! A single pass places ships one length at a time, drawing candidate bows
//! until one fits. The attempt budget is shared by the whole fleet; when it
//! runs out the pass fails and the caller starts again from an empty board
//! rather than backtracking individual ships.

use rand::Rng;
use thiserror::Error;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{ConfigError, GameConfig};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Failure to produce a board for a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// Every restart exhausted its attempt budget.
    #[error("fleet could not be placed after {restarts} board restarts")]
    Unplaceable { restarts: usize },
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Draw a candidate ship of `length`.
///
/// Bow rows and columns come from `0..=size`, one past the last cell; those
/// candidates are rejected by [`Board::add_ship`] like any other bad fit.
pub fn random_ship<R: Rng + ?Sized>(rng: &mut R, size: usize, length: usize) -> Ship {
    let max = size as i32;
    let bow = Coordinate::new(rng.random_range(0..=max), rng.random_range(0..=max));
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(bow, length, orientation)
}

/// One bounded placement pass onto a fresh board.
///
/// Returns `PlacementExhausted` once `config.placement_attempts` candidates
/// have been tried without completing the fleet. The config is assumed
/// valid; see [`random_board`] for the checked entry point.
pub fn try_place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
) -> Result<Board, BoardError> {
    let mut board = Board::new(config.board_size)?;
    let mut attempts = 0;
    for &length in &config.ship_lengths {
        loop {
            attempts += 1;
            if attempts > config.placement_attempts {
                return Err(BoardError::PlacementExhausted {
                    attempts: config.placement_attempts,
                });
            }
            let ship = random_ship(rng, config.board_size, length);
            match board.add_ship(ship) {
                Ok(()) => break,
                Err(BoardError::InvalidPlacement) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    board.reset_targeting_memory();
    log::debug!(
        "fleet of {} placed in {} attempts",
        config.ship_lengths.len(),
        attempts
    );
    Ok(board)
}

/// Validate `config` and build a board, restarting from empty whenever a
/// pass runs out of attempts.
pub fn random_board<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
) -> Result<Board, SetupError> {
    config.validate()?;
    let restarts = config.max_board_restarts.max(1);
    for restart in 0..restarts {
        match try_place_fleet(rng, config) {
            Ok(board) => return Ok(board),
            Err(BoardError::PlacementExhausted { attempts }) => {
                log::debug!(
                    "placement pass {} gave up after {} attempts",
                    restart + 1,
                    attempts
                );
            }
            Err(e) => return Err(e.into()),
        }
    }
    Err(SetupError::Unplaceable { restarts })
}
