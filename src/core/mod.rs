//! Core game types: players, dice, decisions, match state, configuration.
//!
//! Everything here is independent of how turns are executed; see `rules`
//! for the turn engines and `game` for the match loop.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerId, PlayerKind, PlayerMap, PLAYER_COUNT};
pub use rng::{DiceSource, GameRng, ScriptedDice, MAX_FACE, MIN_FACE};
pub use config::{MatchConfig, TIME_LIMIT, TURN_RISK_CAP, WINNING_SCORE};
pub use action::{Decision, TurnOutcome, TurnRecord};
pub use state::MatchState;
