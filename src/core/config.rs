//! Game configuration types.
//!
//! - `Layout`: grid shape (rows × columns)
//! - `MatchedCardPolicy`: how presses on already-matched cards are treated
//! - `MatchConfig`: combines the above with the RNG seed and event backlog

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// Grid shape. Every cell holds one card, so the cell count must be even.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub rows: usize,
    pub columns: usize,
}

impl Layout {
    /// Create a layout.
    #[must_use]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Total number of cards. Saturates for layouts `validate` rejects.
    #[must_use]
    pub const fn cells(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Number of distinct faces dealt (each appears twice).
    #[must_use]
    pub const fn pairs(&self) -> usize {
        self.cells() / 2
    }

    /// Reject layouts that cannot be tiled with pairs.
    pub fn validate(&self) -> Result<()> {
        let cells = self.rows.checked_mul(self.columns).unwrap_or(0);
        if cells == 0 || cells % 2 != 0 {
            return Err(MatchError::InvalidLayout {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

impl Default for Layout {
    /// Four rows of three: 12 cards, 6 pairs.
    fn default() -> Self {
        Self::new(4, 3)
    }
}

/// What a press on a card whose face is already matched does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchedCardPolicy {
    /// The press runs through the selection rules like any other card,
    /// counting a move.
    #[default]
    Participate,
    /// The press is rejected without touching any state.
    Ignore,
}

/// Engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Grid shape (default 4×3).
    pub layout: Layout,

    /// Seed for the dealing RNG. Same seed deals the same sequence of grids.
    pub seed: u64,

    /// Treatment of presses on already-matched cards.
    pub matched_card_policy: MatchedCardPolicy,

    /// Most undrained presentation events kept; older ones are dropped
    /// first. Zero disables event recording.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

fn default_event_capacity() -> usize {
    256
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            seed: 42,
            matched_card_policy: MatchedCardPolicy::Participate,
            event_capacity: default_event_capacity(),
        }
    }
}

impl MatchConfig {
    /// Create a new config with a custom layout.
    pub fn with_layout(mut self, rows: usize, columns: usize) -> Self {
        self.layout = Layout::new(rows, columns);
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom matched-card policy.
    pub fn with_matched_card_policy(mut self, policy: MatchedCardPolicy) -> Self {
        self.matched_card_policy = policy;
        self
    }

    /// Create a new config with a custom event backlog.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.layout, Layout::new(4, 3));
        assert_eq!(config.layout.pairs(), 6);
        assert_eq!(config.seed, 42);
        assert_eq!(config.matched_card_policy, MatchedCardPolicy::Participate);
        assert_eq!(config.event_capacity, 256);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::default()
            .with_layout(2, 4)
            .with_seed(123)
            .with_matched_card_policy(MatchedCardPolicy::Ignore);

        assert_eq!(config.layout.cells(), 8);
        assert_eq!(config.seed, 123);
        assert_eq!(config.matched_card_policy, MatchedCardPolicy::Ignore);
    }

    #[test]
    fn test_layout_validation() {
        assert!(Layout::new(4, 3).validate().is_ok());
        assert!(Layout::new(1, 2).validate().is_ok());
        assert_eq!(
            Layout::new(3, 3).validate(),
            Err(MatchError::InvalidLayout { rows: 3, columns: 3 })
        );
        assert!(Layout::new(0, 4).validate().is_err());
    }

    #[test]
    fn test_layout_overflow_rejected() {
        assert_eq!(
            Layout::new(usize::MAX, 2).validate(),
            Err(MatchError::InvalidLayout {
                rows: usize::MAX,
                columns: 2
            })
        );
        assert_eq!(Layout::new(usize::MAX, 2).cells(), usize::MAX);
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.seed, 9);
        assert_eq!(deserialized.layout, config.layout);
    }

    #[test]
    fn test_missing_event_capacity_defaults() {
        let json = r#"{"layout":{"rows":2,"columns":2},"seed":1,"matched_card_policy":"Ignore"}"#;
        let config: MatchConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.event_capacity, 256);
    }
}
