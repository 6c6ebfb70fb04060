//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::rng::DiceRng;

/// Configuration for a [`RoundEngine`](crate::engine::RoundEngine).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Dice seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Record every roll into a [`Transcript`](crate::history::Transcript).
    pub record_history: bool,
}

impl EngineConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed dice seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Turn roll recording on or off.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Build the dice this config describes.
    #[must_use]
    pub fn dice(&self) -> DiceRng {
        match self.seed {
            Some(seed) => DiceRng::new(seed),
            None => DiceRng::from_entropy(),
        }
    }
}
