//! Presentation events.
//!
//! The engine never waits on a view. It appends events as state changes and
//! the view drains them to schedule flips, fades, and dialogs on its own
//! clock.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardFace, CardId};

use super::outcome::Completion;

/// Something a view may want to animate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A new grid was dealt. Cards are listed row by row, all face-down.
    Dealt { cards: Vec<Card> },
    /// A card turned face-up.
    Revealed(CardId),
    /// A card turned face-down again.
    Concealed(CardId),
    /// Both cards of a face are now permanently face-up.
    PairMatched(CardFace),
    /// The last pair was found.
    Completed(Completion),
    /// The round was discarded. A `Dealt` follows.
    Reset,
}
