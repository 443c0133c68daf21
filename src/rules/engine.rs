//! Turn engine trait and the standard Pig turn.
//!
//! A turn runs the state machine
//!
//! ```text
//! AwaitingDecision --Roll, face != 1--> AwaitingDecision (unbanked += face)
//! AwaitingDecision --Roll, face == 1--> Busted (unbanked discarded)
//! AwaitingDecision --Hold-----------> Held   (unbanked banked)
//! ```
//!
//! and then passes ownership to the other seat whichever way it ended.

use std::fmt;
use std::time::Duration;

use smallvec::SmallVec;

use crate::core::{Decision, DiceSource, MatchState, PlayerId, TurnOutcome, TurnRecord};
use crate::error::Result;

/// Face that ends a turn and forfeits its points.
pub const BUST_FACE: u8 = 1;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal banked scores.
    Draw,
}

impl GameResult {
    /// Result for the current standings: the strictly higher score wins.
    #[must_use]
    pub fn from_standings(state: &MatchState) -> Self {
        state.leader().map_or(GameResult::Draw, GameResult::Winner)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// The deadline passed before a turn could start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeLimitExceeded {
    /// Time since the match started.
    pub elapsed: Duration,
    /// Limit that was exceeded.
    pub limit: Duration,
}

impl fmt::Display for TimeLimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Time limit reached")
    }
}

/// What happened when a turn was requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// The turn ran to a hold or a bust.
    Completed(TurnRecord),
    /// The turn was not run; ownership did not change.
    TimeLimitExceeded(TimeLimitExceeded),
}

/// Executes one turn for the active player.
///
/// ## Implementation Notes
///
/// - A completed turn must leave `state` with ownership passed on
/// - A policy error aborts the turn with nothing banked
pub trait TurnEngine {
    fn play_turn(&mut self, state: &mut MatchState) -> Result<TurnStatus>;
}

impl<E: TurnEngine + ?Sized> TurnEngine for Box<E> {
    fn play_turn(&mut self, state: &mut MatchState) -> Result<TurnStatus> {
        (**self).play_turn(state)
    }
}

/// Untimed Pig turns rolled with `D`.
#[derive(Clone, Debug)]
pub struct StandardTurns<D> {
    dice: D,
}

impl<D: DiceSource> StandardTurns<D> {
    pub fn new(dice: D) -> Self {
        Self { dice }
    }

    /// The dice in use.
    pub fn dice(&self) -> &D {
        &self.dice
    }
}

impl<D: DiceSource> TurnEngine for StandardTurns<D> {
    fn play_turn(&mut self, state: &mut MatchState) -> Result<TurnStatus> {
        let id = state.active_player();
        let player = state.player_mut(id);

        let mut rolls: SmallVec<[u8; 8]> = SmallVec::new();
        let mut unbanked = 0u32;

        let outcome = loop {
            match player.decide(unbanked)? {
                Decision::Hold => {
                    player.bank(unbanked);
                    break TurnOutcome::Held { points: unbanked };
                }
                Decision::Roll => {
                    let face = self.dice.roll();
                    rolls.push(face);
                    log::debug!("{} rolled {}", player.name(), face);

                    if face == BUST_FACE {
                        break TurnOutcome::Busted {
                            forfeited: unbanked,
                        };
                    }
                    unbanked += u32::from(face);
                }
            }
        };

        match outcome {
            TurnOutcome::Held { points } => {
                log::info!("{} holds, banking {} (total {})", player.name(), points, player.score())
            }
            TurnOutcome::Busted { forfeited } => {
                log::info!("{} busts, forfeiting {}", player.name(), forfeited)
            }
        }

        let record = TurnRecord {
            player: id,
            rolls,
            outcome,
        };
        state.end_turn(record.clone());
        Ok(TurnStatus::Completed(record))
    }
}
