//! Game constants and match configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::player::PlayerKind;

/// Banked score that ends the match.
pub const WINNING_SCORE: u32 = 100;

/// Unbanked points at which the computer player always holds.
/// It also holds on every turn once within this many points of winning.
pub const TURN_RISK_CAP: u32 = 25;

/// Wall-clock limit for timed matches.
pub const TIME_LIMIT: Duration = Duration::from_secs(60);

/// Match setup: who sits where and whether the clock runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Kind of player in the first seat.
    pub player1: PlayerKind,

    /// Kind of player in the second seat.
    pub player2: PlayerKind,

    /// Stop the match once `time_limit` has elapsed at a turn boundary.
    pub timed: bool,

    /// Limit applied when `timed` is set.
    pub time_limit: Duration,

    /// Dice seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player1: PlayerKind::Computer,
            player2: PlayerKind::Computer,
            timed: false,
            time_limit: TIME_LIMIT,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create a config seating the two given kinds.
    pub fn new(player1: PlayerKind, player2: PlayerKind) -> Self {
        Self {
            player1,
            player2,
            ..Self::default()
        }
    }

    /// Enable or disable the time limit.
    #[must_use]
    pub fn with_timed(mut self, timed: bool) -> Self {
        self.timed = timed;
        self
    }

    /// Use a custom time limit.
    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Use a fixed dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
