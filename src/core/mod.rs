//! Core engine plumbing: deterministic RNG and configuration.
//!
//! Nothing in here knows about matching rules. The dealer draws from
//! `GameRng`, and `MatchConfig` tells the engine how to lay out the grid.

pub mod config;
pub mod rng;

pub use config::{Layout, MatchConfig, MatchedCardPolicy};
pub use rng::{GameRng, GameRngState};
