//! # rust-pig
//!
//! The dice game Pig for two players, human or computer.
//!
//! ## Rules
//!
//! On your turn you roll a die as often as you like, adding each face to
//! your turn total. Rolling a 1 busts: the turn total is lost and play
//! passes. Holding banks the turn total. First to 100 banked points wins.
//!
//! ## Architecture
//!
//! - **Policies decide, engines roll**: a `DecisionPolicy` only answers
//!   roll-or-hold; the `TurnEngine` owns the dice and the scoring rules.
//!
//! - **Composition for the clock**: `TimedTurns` wraps any engine and
//!   reports `TurnStatus::TimeLimitExceeded` instead of failing.
//!
//! - **Injectable dice**: seeded `GameRng` for play, `ScriptedDice` for
//!   exact scenarios.
//!
//! ## Modules
//!
//! - `core`: Players, dice, decisions, match state, configuration
//! - `policy`: Interactive and automatic decision policies
//! - `rules`: Turn engines (standard and timed)
//! - `game`: Match loop and result reporting
//! - `cli`: Command-line arguments and logging setup

pub mod core;
pub mod policy;
pub mod rules;
pub mod game;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Decision, DiceSource, GameRng, MatchConfig, MatchState, Player, PlayerId, PlayerKind,
    PlayerMap, ScriptedDice, TurnOutcome, TurnRecord,
};

pub use crate::policy::{AutomaticPolicy, DecisionContext, DecisionPolicy, InteractivePolicy};

pub use crate::rules::{GameResult, StandardTurns, TimeLimitExceeded, TimedTurns, TurnEngine, TurnStatus};

pub use crate::game::{MatchEnd, MatchReport, PigMatch};

pub use crate::error::{PigError, Result};
