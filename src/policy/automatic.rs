//! Computer player heuristic.

use crate::core::{Decision, TURN_RISK_CAP, WINNING_SCORE};
use crate::error::Result;

use super::{DecisionContext, DecisionPolicy};

/// Hold-at heuristic for computer players.
///
/// Holds when any of these is true:
/// - banking now would reach the winning score
/// - the turn has put `TURN_RISK_CAP` or more points at risk
/// - the banked score is within `TURN_RISK_CAP` of winning
///
/// Otherwise rolls.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutomaticPolicy;

impl AutomaticPolicy {
    /// The heuristic itself, for callers that do not need a context.
    #[must_use]
    pub fn choose(banked: u32, unbanked: u32) -> Decision {
        let would_win = banked.saturating_add(unbanked) >= WINNING_SCORE;
        let at_risk_cap = unbanked >= TURN_RISK_CAP;
        let near_goal = WINNING_SCORE.saturating_sub(banked) <= TURN_RISK_CAP;

        if would_win || at_risk_cap || near_goal {
            Decision::Hold
        } else {
            Decision::Roll
        }
    }
}

impl DecisionPolicy for AutomaticPolicy {
    fn decide(&mut self, ctx: &DecisionContext<'_>) -> Result<Decision> {
        Ok(Self::choose(ctx.banked, ctx.unbanked))
    }

    fn is_deterministic(&self) -> bool {
        true
    }
}
