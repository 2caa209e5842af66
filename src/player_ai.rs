use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    board::Board,
    coordinate::Coordinate,
    player::{Player, TargetError},
};

/// Computer player that fires at uniformly random cells.
///
/// By default it keeps no record of earlier shots, so a repeated cell is
/// rejected by the board and drawn again. [`AiPlayer::with_memory`] draws only
/// from cells the opponent's board has not recorded as targeted, which is the
/// same information a human sees on the rendered grid.
pub struct AiPlayer {
    remember: bool,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self { remember: false }
    }

    /// AI that never picks the same cell twice.
    pub fn with_memory() -> Self {
        Self { remember: true }
    }

    pub fn remembers_shots(&self) -> bool {
        self.remember
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        "computer"
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<Coordinate, TargetError> {
        if opponent.size() == 0 {
            return Err(TargetError::InputClosed);
        }
        if !self.remember {
            let n = opponent.size() as i32;
            return Ok(Coordinate::new(
                rng.random_range(0..n),
                rng.random_range(0..n),
            ));
        }
        let fresh = opponent.untargeted_cells().count();
        if fresh == 0 {
            // Nothing left to shoot at.
            return Err(TargetError::InputClosed);
        }
        let pick = rng.random_range(0..fresh);
        opponent
            .untargeted_cells()
            .nth(pick)
            .ok_or(TargetError::InputClosed)
    }
}
