//! Core game types: rolls, points, phases, tallies, dice, configuration.
//!
//! Everything here is independent of how a session is driven. The round
//! engine in [`crate::engine`] composes these types.

pub mod roll;
pub mod outcome;
pub mod phase;
pub mod tally;
pub mod rng;
pub mod config;

pub use roll::{Point, Roll, DIE_FACES};
pub use outcome::{ComeOutResult, PointResult, RollOutcome};
pub use phase::Phase;
pub use tally::Tally;
pub use rng::{DiceRng, DiceRngState, DiceSource, ScriptedDice};
pub use config::EngineConfig;
