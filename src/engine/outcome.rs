//! Results reported to the presentation layer.

use serde::{Deserialize, Serialize};

/// Result of one `select` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// First card of a cycle is showing; waiting for its partner.
    Pending,
    /// Second card matched the first. Both stay face-up for good.
    Matched,
    /// Second card did not match. Both show until the next press.
    Mismatched,
    /// Press ignored; no state changed.
    Rejected,
    /// The press matched the last pair.
    GameComplete(Completion),
}

impl SelectionOutcome {
    /// Did this press complete a pair (including the final one)?
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched | Self::GameComplete(_))
    }
}

/// Summary of a finished round, with enough context for the win message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Moves taken this round.
    pub moves: u32,
    /// Best score before this round finished.
    pub previous_best: Option<u32>,
    /// Best score after this round (equal to `moves` on a new record).
    pub best: u32,
    /// Strictly better than every earlier round, or the first finished one.
    pub new_record: bool,
}

impl Completion {
    pub(crate) fn new(moves: u32, previous_best: Option<u32>) -> Self {
        let new_record = previous_best.map_or(true, |best| moves < best);
        let best = if new_record {
            moves
        } else {
            previous_best.unwrap_or(moves)
        };
        Self {
            moves,
            previous_best,
            best,
            new_record,
        }
    }
}

impl std::fmt::Display for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "You completed the puzzle in {} moves! ", self.moves)?;
        if self.new_record {
            write!(f, "You set the new high score!")
        } else {
            write!(f, "The high score is {} moves.", self.best)
        }
    }
}

/// Display counters for the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub move_count: u32,
    pub best_move_count: Option<u32>,
    pub matched_face_count: usize,
    pub complete: bool,
}
