//! Placed cards.
//!
//! A `Card` is one physical card in the current deal. Two cards share a
//! `CardFace` but never a `CardId`. Cards are never mutated; whether a card
//! is face-up is derived from engine state on demand.

use serde::{Deserialize, Serialize};

use super::face::CardFace;

/// Identity of one placed card.
///
/// Allocated by the dealer from a counter that never rewinds, so ids from a
/// previous deal are never valid in the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Row and column of a card in the grid (both 0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: usize,
    pub column: usize,
}

impl GridPosition {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A card placed in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub face: CardFace,
    pub position: GridPosition,
}

impl Card {
    #[must_use]
    pub const fn new(id: CardId, face: CardFace, position: GridPosition) -> Self {
        Self { id, face, position }
    }
}
