//! Match driver.
//!
//! `PigMatch` owns the seated players and a turn engine, plays turns until
//! the match is decided, and writes the running scores and result.

mod runner;

pub use runner::{MatchEnd, MatchReport, PigMatch, PLAYER_NAMES};
