//! Dice sources.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical roll sequence
//! - **Reportable**: Entropy-seeded dice still expose their seed, so any
//!   match can be reproduced with `--seed`
//! - **Scriptable**: `ScriptedDice` replays fixed faces for exact scenarios
//!
//! ```
//! use rust_pig::core::{DiceSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! for _ in 0..20 {
//!     let face = a.roll();
//!     assert!((1..=6).contains(&face));
//!     assert_eq!(face, b.roll());
//! }
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lowest face of a die.
pub const MIN_FACE: u8 = 1;

/// Highest face of a die.
pub const MAX_FACE: u8 = 6;

/// Source of single die outcomes.
///
/// Each call yields one face in `1..=6`, independent of previous calls.
pub trait DiceSource {
    /// Roll one die.
    fn roll(&mut self) -> u8;
}

/// Seeded six-sided die.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create dice with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create dice seeded from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed these dice were created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(MIN_FACE..=MAX_FACE)
    }
}

/// Dice that replay a fixed sequence of faces.
///
/// ```
/// use rust_pig::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([3, 4, 1]);
/// assert_eq!(dice.roll(), 3);
/// assert_eq!(dice.remaining(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
}

impl ScriptedDice {
    /// Create dice from a sequence of faces.
    ///
    /// # Panics
    ///
    /// Panics if any face lies outside `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: VecDeque<u8> = faces.into_iter().collect();
        assert!(
            faces.iter().all(|f| (MIN_FACE..=MAX_FACE).contains(f)),
            "Scripted faces must be in 1..=6"
        );
        Self { faces }
    }

    /// Number of faces not yet rolled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedDice {
    /// # Panics
    ///
    /// Panics when the script is exhausted.
    fn roll(&mut self) -> u8 {
        self.faces.pop_front().expect("Scripted dice exhausted")
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}
