//! Turn execution.
//!
//! `StandardTurns` plays plain Pig turns; `TimedTurns` wraps any engine
//! with a deadline. Both implement `TurnEngine`.

pub mod engine;
pub mod timed;

pub use engine::{GameResult, StandardTurns, TimeLimitExceeded, TurnEngine, TurnStatus, BUST_FACE};
pub use timed::TimedTurns;
