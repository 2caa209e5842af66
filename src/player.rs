use alloc::string::String;
use rand::rngs::SmallRng;

use crate::{board::Board, common::BoardError, common::ShotOutcome, coordinate::Coordinate};

/// Why a player could not produce a target this time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// Input was malformed; the player should be asked again.
    Invalid(String),
    /// No more input will arrive. Ends the game.
    InputClosed,
}

/// Interface implemented by the two kinds of actor.
pub trait Player {
    /// Short label used in logs and turn reports.
    fn name(&self) -> &str;

    /// Choose the next cell to fire at on `opponent`.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<Coordinate, TargetError>;

    /// Inform the player of the result of its last accepted shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the player that its target was rejected by the board.
    fn handle_rejected_shot(&mut self, _target: Coordinate, _err: &BoardError) {}

    /// Inform the player that its input could not be parsed.
    fn handle_invalid_input(&mut self, _message: &str) {}
}
