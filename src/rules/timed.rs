//! Deadline wrapper for any turn engine.

use std::time::{Duration, Instant};

use crate::core::MatchState;
use crate::error::Result;

use super::engine::{TimeLimitExceeded, TurnEngine, TurnStatus};

/// Wraps a turn engine with a wall-clock limit.
///
/// The clock is checked once before each turn. A turn that has started
/// always runs to its end, however long it takes.
#[derive(Clone, Debug)]
pub struct TimedTurns<E> {
    inner: E,
    start: Instant,
    limit: Duration,
}

impl<E: TurnEngine> TimedTurns<E> {
    /// Start the clock now.
    pub fn new(inner: E, limit: Duration) -> Self {
        Self::started_at(inner, limit, Instant::now())
    }

    /// Use an explicit start time.
    pub fn started_at(inner: E, limit: Duration, start: Instant) -> Self {
        Self {
            inner,
            start,
            limit,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<E: TurnEngine> TurnEngine for TimedTurns<E> {
    fn play_turn(&mut self, state: &mut MatchState) -> Result<TurnStatus> {
        let elapsed = self.elapsed();
        if elapsed > self.limit {
            log::warn!(
                "time limit of {:?} exceeded after {:.1?}, skipping turn {}",
                self.limit,
                elapsed,
                state.turn_number()
            );
            return Ok(TurnStatus::TimeLimitExceeded(TimeLimitExceeded {
                elapsed,
                limit: self.limit,
            }));
        }
        self.inner.play_turn(state)
    }
}
