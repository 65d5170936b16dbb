//! Per-round state and the selection state machine.
//!
//! ## Phases
//!
//! The phase is implied by how many cards are pending:
//!
//! - **Empty**: nothing selected
//! - **OnePending**: one card face-up, `pending_face` set
//! - **TwoResolving**: two cards face-up; the next press clears them first
//!
//! ## Visibility
//!
//! A card is face-up iff it is selected or its face is matched. Nothing
//! stores a per-card flag.

use im::OrdSet;
use smallvec::SmallVec;

use crate::cards::{Card, CardFace, CardId};
use crate::deck::Grid;

/// Phase of the current selection cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Empty,
    OnePending,
    TwoResolving,
}

/// What a single press did to the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Press {
    Pending,
    /// A face paired for the first time this round.
    Matched,
    /// Both cards of an already-matched face paired again.
    Rematched,
    Mismatched,
}

/// Everything that `reset` discards.
///
/// `matched_faces` is an `im` ordered set so cloning the round for a view
/// or a test costs O(1).
#[derive(Clone, Debug)]
pub struct RoundState {
    grid: Grid,
    selected: SmallVec<[CardId; 2]>,
    pending_face: Option<CardFace>,
    matched_faces: OrdSet<CardFace>,
    move_count: u32,
}

impl RoundState {
    /// Fresh round over a newly dealt grid.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            selected: SmallVec::new(),
            pending_face: None,
            matched_faces: OrdSet::new(),
            move_count: 0,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Pending card ids in press order.
    #[must_use]
    pub fn selected(&self) -> &[CardId] {
        &self.selected
    }

    #[must_use]
    pub fn pending_face(&self) -> Option<CardFace> {
        self.pending_face
    }

    #[must_use]
    pub fn matched_faces(&self) -> &OrdSet<CardFace> {
        &self.matched_faces
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.selected.len() {
            0 => Phase::Empty,
            1 => Phase::OnePending,
            _ => Phase::TwoResolving,
        }
    }

    #[must_use]
    pub fn is_matched(&self, face: CardFace) -> bool {
        self.matched_faces.contains(&face)
    }

    /// All pairs found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_faces.len() == self.grid.pair_count()
    }

    /// Derived visibility of a placed card.
    #[must_use]
    pub fn is_face_up(&self, card: &Card) -> bool {
        self.selected.contains(&card.id) || self.matched_faces.contains(&card.face)
    }

    /// Apply one press.
    ///
    /// If two cards are still showing from the previous cycle they are
    /// cleared first, without counting a move, and the press is then
    /// evaluated against the empty selection. Exactly one move and one
    /// selection are recorded either way.
    pub fn press(&mut self, card: Card) -> Press {
        if self.selected.len() > 1 {
            self.selected.clear();
        }

        self.move_count = self.move_count.saturating_add(1);

        if self.selected.is_empty() {
            self.pending_face = Some(card.face);
            self.selected.push(card.id);
            return Press::Pending;
        }

        let is_pair = self.pending_face == Some(card.face) && !self.selected.contains(&card.id);
        self.selected.push(card.id);

        if is_pair {
            self.pending_face = None;
            if self.matched_faces.insert(card.face).is_none() {
                Press::Matched
            } else {
                Press::Rematched
            }
        } else {
            Press::Mismatched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Catalog;
    use crate::core::{GameRng, Layout};
    use crate::deck::deal;

    fn round() -> RoundState {
        let catalog = Catalog::from_names(["A", "B", "C", "D", "E", "F"]).unwrap();
        let grid = deal(&catalog, Layout::default(), &mut GameRng::new(11)).unwrap();
        RoundState::new(grid)
    }

    fn pair(round: &RoundState, face: u32) -> (Card, Card) {
        let mut cards = round
            .grid()
            .cards()
            .filter(|c| c.face == CardFace::new(face))
            .copied();
        (cards.next().unwrap(), cards.next().unwrap())
    }

    #[test]
    fn test_new_round_is_empty() {
        let round = round();

        assert_eq!(round.phase(), Phase::Empty);
        assert_eq!(round.move_count(), 0);
        assert!(round.matched_faces().is_empty());
        assert!(round.grid().cards().all(|c| !round.is_face_up(c)));
    }

    #[test]
    fn test_match_cycle() {
        let mut round = round();
        let (a1, a2) = pair(&round, 0);

        assert_eq!(round.press(a1), Press::Pending);
        assert_eq!(round.phase(), Phase::OnePending);
        assert_eq!(round.pending_face(), Some(a1.face));

        assert_eq!(round.press(a2), Press::Matched);
        assert_eq!(round.phase(), Phase::TwoResolving);
        assert_eq!(round.pending_face(), None);
        assert!(round.is_matched(a1.face));
        assert_eq!(round.move_count(), 2);
    }

    #[test]
    fn test_same_card_twice_is_not_a_match() {
        let mut round = round();
        let (a1, _) = pair(&round, 0);

        round.press(a1);
        assert_eq!(round.press(a1), Press::Mismatched);
        assert!(round.matched_faces().is_empty());
        assert_eq!(round.selected(), &[a1.id, a1.id]);
    }

    #[test]
    fn test_collapse_counts_one_move() {
        let mut round = round();
        let (a1, _) = pair(&round, 0);
        let (b1, _) = pair(&round, 1);
        let (c1, _) = pair(&round, 2);

        round.press(a1);
        assert_eq!(round.press(b1), Press::Mismatched);
        assert_eq!(round.move_count(), 2);

        assert_eq!(round.press(c1), Press::Pending);
        assert_eq!(round.move_count(), 3);
        assert_eq!(round.selected(), &[c1.id]);
        assert!(!round.is_face_up(&a1));
        assert!(!round.is_face_up(&b1));
    }

    #[test]
    fn test_rematching_a_face() {
        let mut round = round();
        let (a1, a2) = pair(&round, 0);

        round.press(a1);
        assert_eq!(round.press(a2), Press::Matched);
        round.press(a2);
        assert_eq!(round.press(a1), Press::Rematched);

        assert_eq!(round.matched_faces().len(), 1);
        assert_eq!(round.move_count(), 4);
    }

    #[test]
    fn test_move_count_saturates() {
        let mut round = round();
        let (a1, _) = pair(&round, 0);
        round.move_count = u32::MAX;

        round.press(a1);
        assert_eq!(round.move_count(), u32::MAX);
    }

    #[test]
    fn test_collapse_then_second_pick_never_happens() {
        // After a collapse the press is always a first pick, never a second.
        let mut round = round();
        let (a1, a2) = pair(&round, 0);
        let (b1, _) = pair(&round, 1);

        round.press(b1);
        round.press(a1);
        assert_eq!(round.press(a2), Press::Pending);
        assert!(!round.is_matched(a1.face));
    }
}
