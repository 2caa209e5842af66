//! Turn controller: alternates the acting side and decides the winner.

use rand::Rng;
use rand::rngs::SmallRng;
use thiserror::Error;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    config::GameConfig,
    coordinate::Coordinate,
    placement::{random_board, SetupError},
    player::{Player, TargetError},
};

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Primary,
    Secondary,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Primary => Side::Secondary,
            Side::Secondary => Side::Primary,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Primary => 0,
            Side::Secondary => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    InProgress,
    PrimaryWon,
    SecondaryWon,
}

impl Phase {
    fn won_by(side: Side) -> Self {
        match side {
            Side::Primary => Phase::PrimaryWon,
            Side::Secondary => Phase::SecondaryWon,
        }
    }

    /// Winning side, if the game is over.
    pub fn winner(self) -> Option<Side> {
        match self {
            Phase::InProgress => None,
            Phase::PrimaryWon => Some(Side::Primary),
            Phase::SecondaryWon => Some(Side::Secondary),
        }
    }
}

/// Errors that stop a turn from completing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Shot rejected by the target board. Retryable for
    /// `OutOfBounds`/`AlreadyTargeted`.
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("the game is already over")]
    GameOver,
    #[error("the acting player has no more input")]
    InputClosed,
}

/// What happened on one accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Side that fired.
    pub shooter: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Side acting next; unchanged after a hit or a sink.
    pub next: Side,
    pub phase: Phase,
}

/// Core game logic holding both boards. `boards[side]` is that side's own
/// fleet, which the other side fires at.
pub struct GameEngine {
    boards: [Board; 2],
    acting: Side,
    phase: Phase,
    shots: [usize; 2],
}

impl GameEngine {
    /// Start a game between two already placed boards. Primary moves first.
    pub fn new(primary: Board, secondary: Board) -> Self {
        Self {
            boards: [primary, secondary],
            acting: Side::Primary,
            phase: Phase::InProgress,
            shots: [0; 2],
        }
    }

    /// Build both boards with random placement. The secondary board is
    /// hidden, as the computer's fleet is in a human-vs-computer game.
    pub fn setup<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Result<Self, GameError> {
        let primary = random_board(rng, config)?;
        let mut secondary = random_board(rng, config)?;
        secondary.set_hidden(true);
        Ok(Self::new(primary, secondary))
    }

    pub fn acting_side(&self) -> Side {
        self.acting
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase != Phase::InProgress
    }

    /// `side`'s own board.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Board the acting side is firing at.
    pub fn target_board(&self) -> &Board {
        self.board(self.acting.opponent())
    }

    pub fn set_hidden(&mut self, side: Side, hidden: bool) {
        self.boards[side.index()].set_hidden(hidden);
    }

    /// Accepted shots fired by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Fire the acting side's shot at `target`.
    ///
    /// A rejected shot returns `GameError::Board` and leaves the whole game
    /// untouched, so the same side simply tries again.
    pub fn fire(&mut self, target: Coordinate) -> Result<TurnReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let shooter = self.acting;
        let outcome = self.boards[shooter.opponent().index()].shot(target)?;
        self.shots[shooter.index()] += 1;

        if !outcome.grants_extra_turn() {
            self.acting = shooter.opponent();
        }
        if self.board(Side::Secondary).is_defeated() {
            self.phase = Phase::won_by(Side::Primary);
        } else if self.board(Side::Primary).is_defeated() {
            self.phase = Phase::won_by(Side::Secondary);
        }
        if let Some(winner) = self.phase.winner() {
            log::info!(
                "{:?} won after {} shots",
                winner,
                self.shots[winner.index()]
            );
        }

        Ok(TurnReport {
            shooter,
            target,
            outcome,
            next: self.acting,
            phase: self.phase,
        })
    }

    /// Ask `player` for targets until one is accepted.
    ///
    /// Malformed input and rejected shots go back to the player and do not
    /// consume the turn.
    pub fn play_turn<P: Player + ?Sized>(
        &mut self,
        player: &mut P,
        rng: &mut SmallRng,
    ) -> Result<TurnReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        loop {
            let target = match player.select_target(rng, self.target_board()) {
                Ok(target) => target,
                Err(TargetError::Invalid(msg)) => {
                    player.handle_invalid_input(&msg);
                    continue;
                }
                Err(TargetError::InputClosed) => return Err(GameError::InputClosed),
            };
            match self.fire(target) {
                Ok(report) => {
                    player.handle_shot_result(target, report.outcome);
                    return Ok(report);
                }
                Err(GameError::Board(err)) if err.is_retryable_shot() => {
                    log::debug!("{} retries: {}", player.name(), err);
                    player.handle_rejected_shot(target, &err);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Play to the end, returning the terminal phase.
    pub fn run(
        &mut self,
        primary: &mut dyn Player,
        secondary: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> Result<Phase, GameError> {
        while !self.is_over() {
            match self.acting {
                Side::Primary => self.play_turn(&mut *primary, rng)?,
                Side::Secondary => self.play_turn(&mut *secondary, rng)?,
            };
        }
        Ok(self.phase)
    }
}
