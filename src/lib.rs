//! # memory-match
//!
//! A memory-matching card game engine: faces are sampled from a catalog,
//! paired, shuffled, and dealt into a grid; the player turns cards over two
//! at a time until every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Derived Visibility**: Whether a card is face-up is computed from the
//!    selection and the matched faces. No per-card flags.
//!
//! 2. **Atomic Presses**: A press that arrives while two cards are showing
//!    clears them and is evaluated as a fresh pick in the same call. One
//!    press, one move.
//!
//! 3. **View Independence**: The engine reports outcomes and events; it
//!    never waits on animation.
//!
//! ## Modules
//!
//! - `core`: Deterministic RNG and configuration
//! - `cards`: Faces, catalog, placed cards
//! - `deck`: Dealing grids
//! - `engine`: Selection state machine, scoring, events

pub mod cards;
pub mod core;
pub mod deck;
pub mod engine;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Layout, MatchConfig, MatchedCardPolicy};

pub use crate::cards::{Card, CardFace, CardId, Catalog, GridPosition};

pub use crate::deck::{deal, Dealer, Grid};

pub use crate::engine::{
    Completion, EngineEvent, MatchEngine, Phase, RoundState, SelectionOutcome, Snapshot,
};

pub use crate::error::{MatchError, Result};
