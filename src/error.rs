//! Error types for dealing and match resolution.

use thiserror::Error;

use crate::cards::CardId;

/// Result type alias using `MatchError`.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors surfaced by the deck generator and the match engine.
///
/// None of these are retried internally. `UnknownCard` indicates a caller
/// bug (an id that was never dealt, or one from a previous deal).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("catalog has {available} faces but the layout needs {required} pairs")]
    InsufficientCatalog { required: usize, available: usize },

    #[error("card {0} is not in the current grid")]
    UnknownCard(CardId),

    #[error("layout {rows}x{columns} cannot be filled with pairs")]
    InvalidLayout { rows: usize, columns: usize },

    #[error("face name {0:?} is already registered")]
    DuplicateFace(String),

    #[error("no card ids left for another {0}-card deal")]
    CardIdsExhausted(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MatchError::InsufficientCatalog {
            required: 6,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "catalog has 4 faces but the layout needs 6 pairs"
        );

        let err = MatchError::UnknownCard(CardId::new(7));
        assert_eq!(err.to_string(), "card Card(7) is not in the current grid");

        let err = MatchError::CardIdsExhausted(12);
        assert_eq!(err.to_string(), "no card ids left for another 12-card deal");
    }
}
