//! Match state: seated players, turn ownership and turn history.

use super::action::TurnRecord;
use super::config::WINNING_SCORE;
use super::player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};

/// Everything that persists between turns of one match.
///
/// ## Defaults
///
/// - `active_player`: first seat
/// - `turn_number`: 1
#[derive(Debug)]
pub struct MatchState {
    players: PlayerMap<Player>,

    active_player: PlayerId,

    /// Turn number (starts at 1).
    turn_number: u32,

    /// Completed turns, oldest first.
    history: Vec<TurnRecord>,
}

impl MatchState {
    /// Seat two players; the first moves first.
    #[must_use]
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            players: PlayerMap::from_pair(first, second),
            active_player: PlayerId::FIRST,
            turn_number: 1,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Banked scores by seat.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<u32> {
        self.players.map(Player::score)
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// True once any banked score has reached the winning score.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.iter().any(|(_, p)| p.score() >= WINNING_SCORE)
    }

    /// True when the last full round had no rolls at all and both seats
    /// are deterministic.
    ///
    /// Nothing changes from such a round, so deterministic policies would
    /// repeat it forever. A seat that can change its mind never stalls.
    #[must_use]
    pub fn is_stalled(&self) -> bool {
        self.players.iter().all(|(_, p)| p.is_deterministic())
            && self.history.len() >= PLAYER_COUNT
            && self
                .history
                .iter()
                .rev()
                .take(PLAYER_COUNT)
                .all(|record| record.rolls.is_empty())
    }

    /// Player with the strictly greater banked score, if any.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        let scores = self.scores();
        let (first, second) = (scores[PlayerId::FIRST], scores[PlayerId::SECOND]);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(PlayerId::FIRST),
            std::cmp::Ordering::Less => Some(PlayerId::SECOND),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Record a completed turn and pass ownership to the other seat.
    pub(crate) fn end_turn(&mut self, record: TurnRecord) {
        debug_assert_eq!(record.player, self.active_player);
        self.history.push(record);
        self.active_player = self.active_player.other();
        self.turn_number += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::TurnOutcome;
    use crate::policy::AutomaticPolicy;
    use smallvec::smallvec;

    fn state() -> MatchState {
        MatchState::new(
            Player::new("Player 1", Box::new(AutomaticPolicy)),
            Player::new("Player 2", Box::new(AutomaticPolicy)),
        )
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.active_player(), PlayerId::FIRST);
        assert_eq!(state.turn_number(), 1);
        assert!(state.history().is_empty());
        assert_eq!(state.scores(), PlayerMap::from_pair(0, 0));
        assert!(!state.is_over());
    }

    #[test]
    fn test_end_turn_alternates() {
        let mut state = state();
        for turn in 0..4 {
            let active = state.active_player();
            state.end_turn(TurnRecord {
                player: active,
                rolls: smallvec![1],
                outcome: TurnOutcome::Busted { forfeited: 0 },
            });
            assert_eq!(state.active_player(), active.other());
            assert_eq!(state.turn_number(), turn + 2);
        }
        assert_eq!(state.history().len(), 4);
    }

    #[test]
    fn test_stalled_after_round_without_rolls() {
        let mut state = state();
        let pass = |player| TurnRecord {
            player,
            rolls: smallvec![],
            outcome: TurnOutcome::Held { points: 0 },
        };

        state.end_turn(pass(PlayerId::FIRST));
        assert!(!state.is_stalled());

        state.end_turn(TurnRecord {
            player: PlayerId::SECOND,
            rolls: smallvec![1],
            outcome: TurnOutcome::Busted { forfeited: 0 },
        });
        assert!(!state.is_stalled());

        state.end_turn(pass(PlayerId::FIRST));
        assert!(!state.is_stalled());
        state.end_turn(pass(PlayerId::SECOND));
        assert!(state.is_stalled());
    }

    #[test]
    fn test_interactive_seat_never_stalls() {
        use crate::policy::InteractivePolicy;

        let mut state = MatchState::new(
            Player::new("Player 1", Box::new(InteractivePolicy::new(&b""[..], std::io::sink()))),
            Player::new("Player 2", Box::new(AutomaticPolicy)),
        );
        for player in [PlayerId::FIRST, PlayerId::SECOND] {
            state.end_turn(TurnRecord {
                player,
                rolls: smallvec![],
                outcome: TurnOutcome::Held { points: 0 },
            });
        }
        assert!(!state.is_stalled());
    }

    #[test]
    fn test_leader() {
        let mut state = state();
        assert_eq!(state.leader(), None);

        state.player_mut(PlayerId::SECOND).bank(10);
        assert_eq!(state.leader(), Some(PlayerId::SECOND));

        state.player_mut(PlayerId::FIRST).bank(11);
        assert_eq!(state.leader(), Some(PlayerId::FIRST));

        state.player_mut(PlayerId::SECOND).bank(1);
        assert_eq!(state.leader(), None);
    }

    #[test]
    fn test_is_over_at_winning_score() {
        let mut state = state();
        state.player_mut(PlayerId::SECOND).bank(99);
        assert!(!state.is_over());
        state.player_mut(PlayerId::SECOND).bank(1);
        assert!(state.is_over());
    }
}
