//! Python bindings for the memory-match engine.
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MatchGame(seed=7)
//! first, second = game.card_ids_with_face(game.faces()[0])
//! game.select(first)     # "pending"
//! game.select(second)    # "matched"
//! game.snapshot()        # (2, None, 1, False)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::MatchError;

mod py_engine;

pub use py_engine::*;

impl From<MatchError> for PyErr {
    fn from(err: MatchError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// memory_match: a memory-matching card game engine.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatchGame>()?;
    Ok(())
}
