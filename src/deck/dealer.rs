//! Dealing grids from a catalog.
//!
//! `deal` is the pure operation; `Dealer` owns the RNG and the card-id
//! counter so consecutive deals never reuse an id.

use tracing::{debug, instrument};

use crate::cards::{Card, CardId, Catalog, GridPosition};
use crate::core::{GameRng, Layout};
use crate::error::{MatchError, Result};

use super::grid::Grid;

/// Deal a fresh grid, numbering cards from zero.
///
/// Fails with `InsufficientCatalog` if the catalog cannot supply
/// `layout.pairs()` distinct faces, with `InvalidLayout` if the layout
/// has an odd or zero cell count, and with `CardIdsExhausted` if the grid
/// would need more ids than `u32` holds.
///
/// ```
/// use memory_match::cards::Catalog;
/// use memory_match::core::{GameRng, Layout};
/// use memory_match::deck::deal;
///
/// let catalog = Catalog::from_names(["A", "B", "C", "D", "E", "F"]).unwrap();
/// let grid = deal(&catalog, Layout::default(), &mut GameRng::new(1)).unwrap();
///
/// assert_eq!(grid.len(), 12);
/// assert_eq!(grid.rows().len(), 4);
/// assert_eq!(grid.faces().len(), 6);
/// ```
pub fn deal(catalog: &Catalog, layout: Layout, rng: &mut GameRng) -> Result<Grid> {
    let mut next_id = 0;
    deal_numbered(catalog, layout, rng, &mut next_id)
}

#[instrument(skip(catalog, rng, next_id), fields(catalog_size = catalog.len()))]
fn deal_numbered(
    catalog: &Catalog,
    layout: Layout,
    rng: &mut GameRng,
    next_id: &mut u32,
) -> Result<Grid> {
    layout.validate()?;

    let pairs = layout.pairs();
    let insufficient = MatchError::InsufficientCatalog {
        required: pairs,
        available: catalog.len(),
    };
    if catalog.len() < pairs {
        return Err(insufficient);
    }

    let first_id = *next_id;
    let end_id = u32::try_from(layout.cells())
        .ok()
        .and_then(|cells| first_id.checked_add(cells))
        .ok_or(MatchError::CardIdsExhausted(layout.cells()))?;

    let mut pool: Vec<_> = catalog.faces().collect();
    let mut tokens = Vec::with_capacity(layout.cells());
    for _ in 0..pairs {
        let face = rng.take(&mut pool).ok_or_else(|| insufficient.clone())?;
        tokens.push(face);
        tokens.push(face);
    }

    rng.shuffle(&mut tokens);

    let mut ids = (first_id..end_id).map(CardId::new);
    let rows: Vec<Vec<Card>> = tokens
        .chunks(layout.columns)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .zip(ids.by_ref())
                .enumerate()
                .map(|(column, (&face, id))| Card::new(id, face, GridPosition::new(row, column)))
                .collect()
        })
        .collect();

    *next_id = end_id;
    debug!(pairs, first_id, "dealt grid");
    Ok(Grid::from_rows(layout, rows))
}

/// Stateful dealer: owns the RNG stream and keeps card ids increasing
/// across deals.
#[derive(Clone, Debug)]
pub struct Dealer {
    rng: GameRng,
    next_card_id: u32,
}

impl Dealer {
    /// Create a dealer drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            next_card_id: 0,
        }
    }

    /// Deal a new grid. Card ids continue from the previous deal.
    ///
    /// On error the id counter is left untouched.
    pub fn deal(&mut self, catalog: &Catalog, layout: Layout) -> Result<Grid> {
        let mut next_id = self.next_card_id;
        let grid = deal_numbered(catalog, layout, &mut self.rng, &mut next_id)?;
        self.next_card_id = next_id;
        Ok(grid)
    }

    /// The RNG, for checkpointing.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardFace;

    fn six_faces() -> Catalog {
        Catalog::from_names(["A", "B", "C", "D", "E", "F"]).unwrap()
    }

    #[test]
    fn test_deal_shape() {
        let grid = deal(&six_faces(), Layout::default(), &mut GameRng::new(42)).unwrap();

        assert_eq!(grid.rows().len(), 4);
        for (r, row) in grid.rows().iter().enumerate() {
            assert_eq!(row.len(), 3);
            for (c, card) in row.iter().enumerate() {
                assert_eq!(card.position, GridPosition::new(r, c));
            }
        }
    }

    #[test]
    fn test_each_face_twice() {
        let grid = deal(&six_faces(), Layout::default(), &mut GameRng::new(42)).unwrap();

        for face in grid.faces() {
            assert_eq!(grid.ids_with_face(face).count(), 2);
        }
        assert_eq!(grid.faces().len(), 6);
    }

    #[test]
    fn test_insufficient_catalog() {
        let catalog = Catalog::from_names(["A", "B", "C", "D", "E"]).unwrap();
        let err = deal(&catalog, Layout::default(), &mut GameRng::new(1)).unwrap_err();

        assert_eq!(
            err,
            MatchError::InsufficientCatalog {
                required: 6,
                available: 5
            }
        );
    }

    #[test]
    fn test_invalid_layout() {
        let err = deal(&six_faces(), Layout::new(3, 3), &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, MatchError::InvalidLayout { rows: 3, columns: 3 });
    }

    #[test]
    fn test_same_seed_same_grid() {
        let catalog = Catalog::standard();
        let g1 = deal(&catalog, Layout::default(), &mut GameRng::new(7)).unwrap();
        let g2 = deal(&catalog, Layout::default(), &mut GameRng::new(7)).unwrap();

        let faces1: Vec<CardFace> = g1.cards().map(|c| c.face).collect();
        let faces2: Vec<CardFace> = g2.cards().map(|c| c.face).collect();
        assert_eq!(faces1, faces2);
    }

    #[test]
    fn test_dealer_ids_never_repeat() {
        let catalog = six_faces();
        let mut dealer = Dealer::new(GameRng::new(5));

        let first = dealer.deal(&catalog, Layout::default()).unwrap();
        let second = dealer.deal(&catalog, Layout::default()).unwrap();

        for card in second.cards() {
            assert!(!first.contains(card.id));
        }
        assert_eq!(second.cards().map(|c| c.id.raw()).min(), Some(12));
    }

    #[test]
    fn test_dealer_resumes_from_rng_state() {
        let catalog = Catalog::standard();
        let mut dealer = Dealer::new(GameRng::new(5));
        dealer.deal(&catalog, Layout::default()).unwrap();

        let saved = dealer.rng().state();
        let next = dealer.deal(&catalog, Layout::default()).unwrap();

        let mut resumed = Dealer::new(GameRng::from_state(&saved));
        let replay = resumed.deal(&catalog, Layout::default()).unwrap();

        let faces: Vec<CardFace> = next.cards().map(|c| c.face).collect();
        let replayed: Vec<CardFace> = replay.cards().map(|c| c.face).collect();
        assert_eq!(faces, replayed);
    }

    #[test]
    fn test_dealer_error_keeps_counter() {
        let small = Catalog::from_names(["A"]).unwrap();
        let mut dealer = Dealer::new(GameRng::new(5));

        assert!(dealer.deal(&small, Layout::default()).is_err());

        let grid = dealer.deal(&six_faces(), Layout::default()).unwrap();
        assert_eq!(grid.cards().map(|c| c.id.raw()).min(), Some(0));
    }

    #[test]
    fn test_dealer_id_space_exhausted() {
        let mut dealer = Dealer {
            rng: GameRng::new(5),
            next_card_id: u32::MAX - 5,
        };

        let err = dealer.deal(&six_faces(), Layout::default()).unwrap_err();
        assert_eq!(err, MatchError::CardIdsExhausted(12));
        assert_eq!(dealer.next_card_id, u32::MAX - 5);

        // The last ids still fit a smaller grid.
        let grid = dealer.deal(&six_faces(), Layout::new(1, 4)).unwrap();
        assert_eq!(grid.cards().map(|c| c.id.raw()).max(), Some(u32::MAX - 2));
        assert_eq!(dealer.next_card_id, u32::MAX - 1);
    }
}
