//! Card faces - the printed image of a card.
//!
//! A face says nothing about where a card sits. Matching compares faces;
//! identity of a placed card is `CardId`.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog entry (a printed image).
///
/// Faces are assigned by `Catalog` in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardFace(pub u32);

impl CardFace {
    /// Create a new face ID.
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

impl std::fmt::Display for CardFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}
