//! Match engine: selection state machine, scoring, and presentation events.
//!
//! ## Key Types
//!
//! - `MatchEngine`: Owns a session; `select`, `reset`, queries
//! - `RoundState`: Per-round fields and the press rules
//! - `SelectionOutcome`: What a press did
//! - `Completion`: Final moves and best-score comparison for a round
//! - `Snapshot`: Counters for display
//! - `EngineEvent`: Reveal/conceal/match/reset notifications for a view

mod engine;
pub mod event;
pub mod outcome;
pub mod state;

pub use engine::MatchEngine;
pub use event::EngineEvent;
pub use outcome::{Completion, SelectionOutcome, Snapshot};
pub use state::{Phase, Press, RoundState};
