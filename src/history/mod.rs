//! Session history.
//!
//! The engine can record each session into a [`Transcript`]: every roll with
//! its classification, plus a point given up by a penalized exit. Transcripts
//! serialize with serde and can be replayed through [`ScriptedDice`](crate::core::ScriptedDice).

mod transcript;

pub use transcript::{RollRecord, Transcript};
