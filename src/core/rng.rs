//! Dice sources.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine rolls through the [`DiceSource`] trait, so tests
//!   can script exact rolls with [`ScriptedDice`]
//! - **Deterministic**: [`DiceRng`] with the same seed throws the same dice
//! - **Forkable**: independent child streams for batch simulation
//! - **Resumable**: O(1) state capture and restore
//!
//! ```
//! use craps_engine::core::{DiceRng, DiceSource};
//!
//! let mut dice = DiceRng::new(42);
//! let mut again = DiceRng::new(42);
//! assert_eq!(dice.roll(), again.roll());
//!
//! // Forks are deterministic too, but differ from their parent.
//! let mut session = dice.fork();
//! let mut session_again = again.fork();
//! assert_eq!(session.roll(), session_again.roll());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::roll::{Roll, DIE_FACES};

/// Anything that can throw a fair six-sided die.
pub trait DiceSource {
    /// Throw one die, returning a value in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Throw both dice.
    ///
    /// # Panics
    ///
    /// Panics if [`roll_die`](DiceSource::roll_die) returns a value outside
    /// `1..=6`.
    fn roll(&mut self) -> Roll {
        let die1 = self.roll_die();
        let die2 = self.roll_die();
        Roll::new(die1, die2).unwrap_or_else(|err| panic!("dice source misbehaved: {err}"))
    }

    /// Current stream position, for sources that can be resumed from one.
    fn checkpoint(&self) -> Option<DiceRngState> {
        None
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }

    fn roll(&mut self) -> Roll {
        (**self).roll()
    }

    fn checkpoint(&self) -> Option<DiceRngState> {
        (**self).checkpoint()
    }
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }

    fn roll(&mut self) -> Roll {
        (**self).roll()
    }

    fn checkpoint(&self) -> Option<DiceRngState> {
        (**self).checkpoint()
    }
}

/// Seeded dice backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl DiceRng {
    /// Create dice with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create dice seeded from the operating system.
    ///
    /// The drawn seed is kept, so the session can still be reproduced.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent child stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Capture the current stream position.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Resume from a captured position.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl DiceSource for DiceRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    fn checkpoint(&self) -> Option<DiceRngState> {
        Some(self.state())
    }
}

/// Serializable [`DiceRng`] position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Forks taken so far
    pub fork_counter: u64,
}

/// Dice that replay a fixed list of rolls.
///
/// # Panics
///
/// Rolling past the end of the script panics: the caller asked for more
/// rolls than it scripted.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
}

impl ScriptedDice {
    /// Script the given rolls, thrown in order.
    pub fn new(rolls: impl IntoIterator<Item = Roll>) -> Self {
        Self {
            faces: rolls.into_iter().flat_map(|r| r.dice()).collect(),
        }
    }

    /// Script rolls from raw die pairs.
    ///
    /// # Panics
    ///
    /// Panics if any value is outside `1..=6`.
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        Self::new(pairs.iter().map(|&(a, b)| {
            Roll::new(a, b).unwrap_or_else(|err| panic!("bad scripted roll ({a}, {b}): {err}"))
        }))
    }

    /// Whole rolls left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len() / 2
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.faces.is_empty()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        self.faces.pop_front().expect("scripted dice exhausted")
    }
}
