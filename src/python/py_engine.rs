//! Engine bindings for Python.

use pyo3::prelude::*;

use crate::cards::{CardFace, CardId, Catalog};
use crate::core::{MatchConfig, MatchedCardPolicy};
use crate::engine::{EngineEvent, MatchEngine, SelectionOutcome};

/// Python wrapper for `MatchEngine`.
///
/// Card ids and faces cross the boundary as plain integers; outcomes as
/// lowercase strings.
#[pyclass(name = "MatchGame")]
pub struct PyMatchGame {
    engine: MatchEngine,
}

#[pymethods]
impl PyMatchGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - faces: Catalog face names (defaults to the standard twelve)
    /// - rows, columns: Grid shape
    /// - seed: RNG seed for deterministic deals
    /// - ignore_matched: Reject presses on already-matched cards
    /// - event_capacity: Undrained events kept (0 disables the feed)
    #[new]
    #[pyo3(signature = (
        faces = None,
        rows = 4,
        columns = 3,
        seed = 42,
        ignore_matched = false,
        event_capacity = 256
    ))]
    fn new(
        faces: Option<Vec<String>>,
        rows: usize,
        columns: usize,
        seed: u64,
        ignore_matched: bool,
        event_capacity: usize,
    ) -> PyResult<Self> {
        let catalog = match faces {
            Some(names) => Catalog::from_names(names)?,
            None => Catalog::standard(),
        };
        let policy = if ignore_matched {
            MatchedCardPolicy::Ignore
        } else {
            MatchedCardPolicy::Participate
        };
        let config = MatchConfig::default()
            .with_layout(rows, columns)
            .with_seed(seed)
            .with_matched_card_policy(policy)
            .with_event_capacity(event_capacity);

        Ok(Self {
            engine: MatchEngine::new(catalog, config)?,
        })
    }

    /// Press a card. Returns "pending", "matched", "mismatched",
    /// "rejected", or "complete".
    fn select(&mut self, card_id: u32) -> PyResult<&'static str> {
        let outcome = self.engine.select(CardId::new(card_id))?;
        Ok(match outcome {
            SelectionOutcome::Pending => "pending",
            SelectionOutcome::Matched => "matched",
            SelectionOutcome::Mismatched => "mismatched",
            SelectionOutcome::Rejected => "rejected",
            SelectionOutcome::GameComplete(_) => "complete",
        })
    }

    /// Discard the round and deal a new grid.
    fn reset(&mut self) -> PyResult<()> {
        self.engine.reset()?;
        Ok(())
    }

    /// Whether a card shows its face.
    fn is_visible(&self, card_id: u32) -> PyResult<bool> {
        Ok(self.engine.is_visible(CardId::new(card_id))?)
    }

    /// Grid as rows of `(card_id, face)` tuples.
    fn grid(&self) -> Vec<Vec<(u32, u32)>> {
        self.engine
            .grid()
            .rows()
            .iter()
            .map(|row| row.iter().map(|c| (c.id.raw(), c.face.raw())).collect())
            .collect()
    }

    /// Distinct faces in the current deal.
    fn faces(&self) -> Vec<u32> {
        self.engine.grid().faces().into_iter().map(CardFace::raw).collect()
    }

    /// Ids of the cards showing `face`.
    fn card_ids_with_face(&self, face: u32) -> Vec<u32> {
        self.engine
            .grid()
            .ids_with_face(CardFace::new(face))
            .map(CardId::raw)
            .collect()
    }

    /// Display name of a face.
    fn face_name(&self, face: u32) -> Option<String> {
        self.engine.catalog().name(CardFace::new(face)).map(str::to_string)
    }

    /// Display counters as
    /// `(move_count, best_move_count, matched_face_count, complete)`.
    fn snapshot(&self) -> (u32, Option<u32>, usize, bool) {
        let snap = self.engine.snapshot();
        (
            snap.move_count,
            snap.best_move_count,
            snap.matched_face_count,
            snap.complete,
        )
    }

    /// Events since the last drain as `(kind, value)` tuples.
    ///
    /// `value` is the card id for "revealed"/"concealed", the face for
    /// "pair_matched", the move count for "completed", and `None` for
    /// "dealt"/"reset" (read the new layout with `grid()`).
    fn drain_events(&mut self) -> Vec<(&'static str, Option<u32>)> {
        self.engine
            .drain_events()
            .into_iter()
            .map(|event| match event {
                EngineEvent::Dealt { .. } => ("dealt", None),
                EngineEvent::Revealed(id) => ("revealed", Some(id.raw())),
                EngineEvent::Concealed(id) => ("concealed", Some(id.raw())),
                EngineEvent::PairMatched(face) => ("pair_matched", Some(face.raw())),
                EngineEvent::Completed(completion) => ("completed", Some(completion.moves)),
                EngineEvent::Reset => ("reset", None),
            })
            .collect()
    }

    /// Win message for the last finished round, if any.
    fn completion_message(&self) -> Option<String> {
        self.engine.last_completion().map(|c| c.to_string())
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.engine.move_count()
    }

    #[getter]
    fn best_move_count(&self) -> Option<u32> {
        self.engine.best_move_count()
    }

    #[getter]
    fn complete(&self) -> bool {
        self.engine.is_complete()
    }

    fn __repr__(&self) -> String {
        let snap = self.engine.snapshot();
        format!(
            "MatchGame(moves={}, matched={}/{}, complete={})",
            snap.move_count,
            snap.matched_face_count,
            self.engine.grid().pair_count(),
            snap.complete
        )
    }
}
