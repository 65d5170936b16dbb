//! The dealt grid.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardFace, CardId, GridPosition};
use crate::core::Layout;

/// Cards arranged in rows and columns.
///
/// Row and column order is stable for the lifetime of the deal. Lookup by
/// `CardId` is O(1).
#[derive(Clone, Debug)]
pub struct Grid {
    layout: Layout,
    rows: Vec<Vec<Card>>,
    index: FxHashMap<CardId, GridPosition>,
}

impl Grid {
    /// Build a grid from already-positioned rows.
    pub(crate) fn from_rows(layout: Layout, rows: Vec<Vec<Card>>) -> Self {
        let index = rows
            .iter()
            .flatten()
            .map(|card| (card.id, card.position))
            .collect();
        Self {
            layout,
            rows,
            index,
        }
    }

    /// Grid shape.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Card>] {
        &self.rows
    }

    /// All cards, row by row.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.rows.iter().flatten()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the grid holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of distinct faces (each dealt twice).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.len() / 2
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        let pos = self.index.get(&id)?;
        self.rows.get(pos.row)?.get(pos.column)
    }

    /// Card at a grid position.
    #[must_use]
    pub fn card_at(&self, position: GridPosition) -> Option<&Card> {
        self.rows.get(position.row)?.get(position.column)
    }

    /// Check if a card id belongs to this deal.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Ids of the cards showing `face`, in grid order.
    pub fn ids_with_face(&self, face: CardFace) -> impl Iterator<Item = CardId> + '_ {
        self.cards()
            .filter(move |card| card.face == face)
            .map(|card| card.id)
    }

    /// Distinct faces in the deal, sorted.
    #[must_use]
    pub fn faces(&self) -> Vec<CardFace> {
        let mut faces: Vec<_> = self.cards().map(|card| card.face).collect();
        faces.sort_unstable();
        faces.dedup();
        faces
    }
}
