//! Automated play.
//!
//! - [`Strategy`]: a no-input player for both deciders
//! - [`SimulationRunner`]: many seeded sessions, aggregated into a
//!   [`SimulationReport`] with the overall return rate

pub mod runner;
pub mod strategy;

pub use runner::{SimulationConfig, SimulationReport, SimulationRunner};
pub use strategy::Strategy;
