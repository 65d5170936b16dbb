//! The match engine.
//!
//! `MatchEngine` owns the catalog, the dealer, the current round, and the
//! best score. All mutation goes through `select` and `reset`, both of
//! which take `&mut self`, so one press always finishes before the next.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use crate::cards::{CardFace, CardId, Catalog};
use crate::core::{GameRng, MatchConfig, MatchedCardPolicy};
use crate::deck::{Dealer, Grid};
use crate::error::{MatchError, Result};

use super::event::EngineEvent;
use super::outcome::{Completion, SelectionOutcome, Snapshot};
use super::state::{Press, RoundState};

/// Memory-match game session.
///
/// ## Example
///
/// ```
/// use memory_match::cards::Catalog;
/// use memory_match::core::MatchConfig;
/// use memory_match::engine::{MatchEngine, SelectionOutcome};
///
/// let mut engine = MatchEngine::new(Catalog::standard(), MatchConfig::default()).unwrap();
///
/// let face = engine.grid().faces()[0];
/// let ids: Vec<_> = engine.grid().ids_with_face(face).collect();
///
/// assert_eq!(engine.select(ids[0]).unwrap(), SelectionOutcome::Pending);
/// assert_eq!(engine.select(ids[1]).unwrap(), SelectionOutcome::Matched);
/// assert_eq!(engine.snapshot().move_count, 2);
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    catalog: Catalog,
    config: MatchConfig,
    dealer: Dealer,
    round: RoundState,
    best_move_count: Option<u32>,
    last_completion: Option<Completion>,
    events: Vector<EngineEvent>,
}

impl MatchEngine {
    /// Create an engine and deal the first grid.
    ///
    /// Fails if the layout is invalid or the catalog is too small for it.
    #[instrument(skip(catalog), fields(catalog_size = catalog.len()))]
    pub fn new(catalog: Catalog, config: MatchConfig) -> Result<Self> {
        let mut dealer = Dealer::new(GameRng::new(config.seed));
        let grid = dealer.deal(&catalog, config.layout)?;

        let mut engine = Self {
            catalog,
            config,
            dealer,
            round: RoundState::new(grid),
            best_move_count: None,
            last_completion: None,
            events: Vector::new(),
        };
        engine.push_dealt();
        Ok(engine)
    }

    // === Queries ===

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.round.grid()
    }

    /// The current round.
    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Pending card ids in press order (at most two).
    #[must_use]
    pub fn selected(&self) -> &[CardId] {
        self.round.selected()
    }

    /// Faces matched so far this round, ascending.
    pub fn matched_faces(&self) -> impl Iterator<Item = CardFace> + '_ {
        self.round.matched_faces().iter().copied()
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.round.move_count()
    }

    /// Lowest completed move count this process, if any round finished.
    #[must_use]
    pub fn best_move_count(&self) -> Option<u32> {
        self.best_move_count
    }

    /// The most recent completion, until the next `reset`.
    #[must_use]
    pub fn last_completion(&self) -> Option<Completion> {
        self.last_completion
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.round.is_complete()
    }

    /// Whether a card currently shows its face.
    pub fn is_visible(&self, id: CardId) -> Result<bool> {
        let card = self.grid().card(id).ok_or(MatchError::UnknownCard(id))?;
        Ok(self.round.is_face_up(card))
    }

    /// Counters for display.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            move_count: self.round.move_count(),
            best_move_count: self.best_move_count,
            matched_face_count: self.round.matched_faces().len(),
            complete: self.round.is_complete(),
        }
    }

    /// Take all events recorded since the last drain, oldest first.
    ///
    /// At most `event_capacity` are kept between drains.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events).into_iter().collect()
    }

    // === Mutation ===

    /// Player pressed a card.
    ///
    /// Rejected without any state change: presses after the last pair is
    /// found, and presses on matched cards under `MatchedCardPolicy::Ignore`.
    #[instrument(skip(self))]
    pub fn select(&mut self, id: CardId) -> Result<SelectionOutcome> {
        let card = *self.grid().card(id).ok_or(MatchError::UnknownCard(id))?;

        if self.round.is_complete() {
            debug!("round already complete");
            return Ok(SelectionOutcome::Rejected);
        }
        if self.config.matched_card_policy == MatchedCardPolicy::Ignore
            && self.round.is_matched(card.face)
        {
            debug!(face = %card.face, "face already matched");
            return Ok(SelectionOutcome::Rejected);
        }

        let mut watched: SmallVec<[CardId; 3]> = SmallVec::from_slice(self.round.selected());
        if !watched.contains(&id) {
            watched.push(id);
        }
        let before: SmallVec<[bool; 3]> = watched.iter().map(|&w| self.face_up(w)).collect();

        let press = self.round.press(card);
        debug!(?press, moves = self.round.move_count(), "press applied");

        for (&w, &was_up) in watched.iter().zip(before.iter()) {
            match (was_up, self.face_up(w)) {
                (true, false) => self.record(EngineEvent::Concealed(w)),
                (false, true) => self.record(EngineEvent::Revealed(w)),
                _ => {}
            }
        }

        let outcome = match press {
            Press::Pending => SelectionOutcome::Pending,
            Press::Mismatched => SelectionOutcome::Mismatched,
            Press::Rematched => SelectionOutcome::Matched,
            Press::Matched => {
                self.record(EngineEvent::PairMatched(card.face));
                if self.round.is_complete() {
                    SelectionOutcome::GameComplete(self.record_completion())
                } else {
                    SelectionOutcome::Matched
                }
            }
        };
        Ok(outcome)
    }

    /// Discard the round and deal a new grid. The best score survives.
    ///
    /// The new grid is dealt before anything is cleared, so a failed deal
    /// leaves the engine as it was.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<()> {
        let grid = self.dealer.deal(&self.catalog, self.config.layout)?;

        self.round = RoundState::new(grid);
        self.last_completion = None;
        self.record(EngineEvent::Reset);
        self.push_dealt();

        debug!(best = ?self.best_move_count, "round reset");
        Ok(())
    }

    // === Internals ===

    fn face_up(&self, id: CardId) -> bool {
        self.grid()
            .card(id)
            .is_some_and(|card| self.round.is_face_up(card))
    }

    fn push_dealt(&mut self) {
        let cards = self.grid().cards().copied().collect();
        self.record(EngineEvent::Dealt { cards });
    }

    /// Queue an event, dropping the oldest past `event_capacity`.
    fn record(&mut self, event: EngineEvent) {
        let capacity = self.config.event_capacity;
        if capacity == 0 {
            return;
        }
        self.events.push_back(event);
        while self.events.len() > capacity {
            self.events.pop_front();
        }
    }

    fn record_completion(&mut self) -> Completion {
        let completion = Completion::new(self.round.move_count(), self.best_move_count);
        self.best_move_count = Some(completion.best);
        self.last_completion = Some(completion);
        self.record(EngineEvent::Completed(completion));

        if completion.new_record {
            info!(moves = completion.moves, previous = ?completion.previous_best, "new best score");
        } else {
            info!(moves = completion.moves, best = completion.best, "round complete");
        }
        completion
    }
}
