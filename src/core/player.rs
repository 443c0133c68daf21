//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! Seat identifier for the two players of a match.
//!
//! ## PlayerMap
//!
//! Fixed pair of per-player values, indexable by `PlayerId`.
//!
//! ## Player
//!
//! Display name, banked score and the policy that makes roll/hold calls.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::{PigError, Result};
use crate::policy::{AutomaticPolicy, DecisionContext, DecisionPolicy, InteractivePolicy};

use super::action::Decision;

/// Number of seats in a match.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier. The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// First seat; moves first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// Second seat.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Both seats in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// One value per seat.
///
/// ```
/// use rust_pig::core::{PlayerId, PlayerMap};
///
/// let mut scores = PlayerMap::with_value(0u32);
/// scores[PlayerId::SECOND] = 40;
/// assert_eq!(scores[PlayerId::FIRST], 0);
/// assert_eq!(scores[PlayerId::SECOND], 40);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map from one value per seat, in seat order.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self::from_pair(factory(PlayerId::FIRST), factory(PlayerId::SECOND))
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all().zip(self.data.iter_mut())
    }

    /// Transform every entry, keeping seat order.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerMap<U> {
        PlayerMap::from_pair(f(&self.data[0]), f(&self.data[1]))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Kind of player behind a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Decisions read from the console.
    Human,
    /// Decisions made by `AutomaticPolicy`.
    Computer,
}

impl PlayerKind {
    /// Command-line tokens accepted for each kind.
    pub const TOKENS: [&'static str; 2] = ["human", "computer"];

    /// Create a player of this kind.
    ///
    /// Humans read from stdin and prompt on stdout.
    pub fn create(self, name: impl Into<String>) -> Player {
        let policy: Box<dyn DecisionPolicy> = match self {
            PlayerKind::Human => Box::new(InteractivePolicy::stdio()),
            PlayerKind::Computer => Box::new(AutomaticPolicy),
        };
        Player::new(name, policy)
    }
}

impl FromStr for PlayerKind {
    type Err = PigError;

    fn from_str(token: &str) -> Result<Self> {
        match token {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            other => Err(PigError::InvalidPlayerType(other.to_string())),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => f.write_str("human"),
            PlayerKind::Computer => f.write_str("computer"),
        }
    }
}

/// A seated player.
///
/// The banked score only grows, and only through [`Player::bank`].
pub struct Player {
    name: String,
    score: u32,
    policy: Box<dyn DecisionPolicy>,
}

impl Player {
    /// Create a player with zero banked points.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: impl Into<String>, policy: Box<dyn DecisionPolicy>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Player name must not be empty");
        Self {
            name,
            score: 0,
            policy,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Banked score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Credit held points to the banked score.
    pub fn bank(&mut self, points: u32) {
        self.score += points;
    }

    /// Ask this player's policy whether to roll again.
    pub fn decide(&mut self, unbanked: u32) -> Result<Decision> {
        let ctx = DecisionContext {
            name: &self.name,
            banked: self.score,
            unbanked,
        };
        self.policy.decide(&ctx)
    }

    /// True when this player's policy cannot change its mind.
    #[must_use]
    pub fn is_deterministic(&self) -> bool {
        self.policy.is_deterministic()
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 1");
    }

    #[test]
    fn test_player_map_new() {
        let map = PlayerMap::new(|p| p.index() * 10);
        assert_eq!(map[PlayerId::FIRST], 0);
        assert_eq!(map[PlayerId::SECOND], 10);
    }

    #[test]
    fn test_player_map_iter_and_map() {
        let mut map = PlayerMap::from_pair(1, 2);
        for (_, v) in map.iter_mut() {
            *v *= 3;
        }
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &3), (PlayerId::SECOND, &6)]);
        assert_eq!(map.map(|v| v + 1), PlayerMap::from_pair(4, 7));
    }

    #[test]
    fn test_player_kind_parse() {
        assert_eq!("human".parse::<PlayerKind>().unwrap(), PlayerKind::Human);
        assert_eq!("computer".parse::<PlayerKind>().unwrap(), PlayerKind::Computer);

        let err = "robot".parse::<PlayerKind>().unwrap_err();
        assert!(matches!(err, PigError::InvalidPlayerType(ref t) if t == "robot"));

        // Tokens are matched exactly
        assert!("Human".parse::<PlayerKind>().is_err());
    }

    #[test]
    fn test_player_kind_tokens_round_trip() {
        for token in PlayerKind::TOKENS {
            let kind: PlayerKind = token.parse().unwrap();
            assert_eq!(kind.to_string(), token);
        }
    }

    #[test]
    fn test_computer_player_decides() {
        let mut player = PlayerKind::Computer.create("Player 2");
        assert_eq!(player.name(), "Player 2");
        assert_eq!(player.decide(0).unwrap(), Decision::Roll);
        assert_eq!(player.decide(25).unwrap(), Decision::Hold);
        assert!(player.is_deterministic());
    }

    #[test]
    fn test_human_player_is_not_deterministic() {
        assert!(!PlayerKind::Human.create("Player 1").is_deterministic());
    }

    #[test]
    fn test_bank_accumulates() {
        let mut player = Player::new("Ada", Box::new(AutomaticPolicy));
        player.bank(12);
        player.bank(0);
        player.bank(9);
        assert_eq!(player.score(), 21);
    }

    #[test]
    fn test_decide_sees_banked_score() {
        let mut player = Player::new("Ada", Box::new(AutomaticPolicy));
        assert_eq!(player.decide(0).unwrap(), Decision::Roll);
        player.bank(80);
        assert_eq!(player.decide(0).unwrap(), Decision::Hold);
    }

    #[test]
    #[should_panic(expected = "Player name must not be empty")]
    fn test_empty_name() {
        let _ = Player::new("", Box::new(AutomaticPolicy));
    }
}
