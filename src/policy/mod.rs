//! Roll/hold decision policies.
//!
//! Policies are trait-based so a seat can be driven by a person or by code:
//! - `InteractivePolicy`: asks on the console
//! - `AutomaticPolicy`: fixed hold-at heuristic

mod automatic;
mod interactive;

pub use automatic::AutomaticPolicy;
pub use interactive::{parse_response, InteractivePolicy, LineSource};

use crate::core::Decision;
use crate::error::Result;

/// What a policy sees when asked to decide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecisionContext<'a> {
    /// Name of the deciding player.
    pub name: &'a str,
    /// Points already banked by the deciding player.
    pub banked: u32,
    /// Points at risk in the current turn.
    pub unbanked: u32,
}

/// Policy deciding whether the active player rolls again.
pub trait DecisionPolicy {
    /// Decide between rolling and holding.
    ///
    /// Only console-backed policies can fail.
    fn decide(&mut self, ctx: &DecisionContext<'_>) -> Result<Decision>;

    /// True when the same banked and unbanked scores always produce the
    /// same decision.
    fn is_deterministic(&self) -> bool {
        false
    }
}

/// Policy that always rolls. Busting is the only way its turn ends.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AlwaysRoll;

#[cfg(test)]
impl DecisionPolicy for AlwaysRoll {
    fn decide(&mut self, _ctx: &DecisionContext<'_>) -> Result<Decision> {
        Ok(Decision::Roll)
    }
}
