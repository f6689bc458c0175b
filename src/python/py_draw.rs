//! Draw bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::Deck;
use crate::core::seed;
use crate::draw::{Draw, DrawnCard, Reading};
use crate::spreads::SpreadCatalog;

/// Python wrapper for DrawnCard.
#[pyclass(name = "DrawnCard")]
#[derive(Clone)]
pub struct PyDrawnCard(pub DrawnCard);

#[pymethods]
impl PyDrawnCard {
    /// Unique id within the draw.
    #[getter]
    fn uid(&self) -> &str {
        self.0.uid()
    }

    /// Catalog id of the card.
    #[getter]
    fn card_id(&self) -> &str {
        &self.0.card().id
    }

    /// Card name.
    #[getter]
    fn name(&self) -> &str {
        &self.0.card().name
    }

    /// "major" or "minor".
    #[getter]
    fn arcana(&self) -> String {
        self.0.card().arcana.to_string()
    }

    #[getter]
    fn keywords(&self) -> Vec<String> {
        self.0.card().keywords.to_vec()
    }

    /// Spread position the card occupies.
    #[getter]
    fn position_id(&self) -> &str {
        self.0.position_id()
    }

    #[getter]
    fn reversed(&self) -> bool {
        self.0.is_reversed()
    }

    #[getter]
    fn revealed(&self) -> bool {
        self.0.is_revealed()
    }

    #[getter]
    fn order(&self) -> usize {
        self.0.order()
    }

    fn __repr__(&self) -> String {
        format!(
            "DrawnCard(uid={:?}, position={:?}, reversed={})",
            self.0.uid(),
            self.0.position_id(),
            self.0.is_reversed()
        )
    }
}

/// Python wrapper for Draw.
#[pyclass(name = "Draw")]
#[derive(Clone)]
pub struct PyDraw(pub Draw);

#[pymethods]
impl PyDraw {
    /// Seed to share for replay.
    #[getter]
    fn seed(&self) -> &str {
        self.0.seed().as_str()
    }

    #[getter]
    fn spread_id(&self) -> &str {
        self.0.spread_id()
    }

    #[getter]
    fn signature(&self) -> &str {
        self.0.signature().as_str()
    }

    /// Cards in position order.
    #[getter]
    fn cards(&self) -> Vec<PyDrawnCard> {
        self.0.cards().iter().cloned().map(PyDrawnCard).collect()
    }

    /// Full draw as JSON.
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.0).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Compact reading summary as JSON, for interpretation prompts.
    fn summary_json(&self) -> PyResult<String> {
        let catalog = SpreadCatalog::builtin();
        let spread = catalog
            .get_or_err(self.0.spread_id())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Reading::new(spread.clone(), self.0.clone())
            .and_then(|reading| reading.summary_json())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Draw(spread={:?}, seed={:?}, cards={})",
            self.0.spread_id(),
            self.0.seed().as_str(),
            self.0.len()
        )
    }
}

/// Draw a built-in spread from the Marseille deck.
///
/// A missing or blank seed is replaced by a generated one.
#[pyfunction]
#[pyo3(name = "draw", signature = (spread_id, seed = None))]
pub fn py_draw(spread_id: &str, seed: Option<&str>) -> PyResult<PyDraw> {
    let catalog = SpreadCatalog::builtin();
    let spread = catalog
        .get_or_err(spread_id)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    let seed = seed::normalize_seed(seed);

    crate::draw::draw(spread, &Deck::marseille(), &seed)
        .map(PyDraw)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Normalize a seed, generating one for blank input.
#[pyfunction]
#[pyo3(name = "normalize_seed", signature = (seed = None))]
pub fn py_normalize_seed(seed: Option<&str>) -> String {
    seed::normalize_seed(seed).into_string()
}

/// Generate a fresh seed.
#[pyfunction]
#[pyo3(name = "generate_seed")]
pub fn py_generate_seed() -> String {
    seed::generate_seed().into_string()
}

/// Ids of the built-in spreads, in selector order.
#[pyfunction]
#[pyo3(name = "spread_ids")]
pub fn py_spread_ids() -> Vec<String> {
    SpreadCatalog::builtin().ids().map(str::to_string).collect()
}
