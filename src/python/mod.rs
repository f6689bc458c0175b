//! Python bindings for the tarot draw engine.
//!
//! Exposes structured draws to Python-side consumers such as an
//! interpretation model.
//!
//! # Quick Start
//!
//! ```python
//! import tarot_draw as tarot
//!
//! reading = tarot.draw("cross", seed="alpha")
//! print(reading.seed, [c.name for c in reading.cards])
//!
//! # Same seed and spread, same cards
//! assert tarot.draw("cross", seed="alpha").to_json() == reading.to_json()
//! ```

use pyo3::prelude::*;

mod py_draw;

pub use py_draw::*;

/// tarot_draw: reproducible Tarot de Marseille spreads.
#[pymodule]
fn tarot_draw(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDrawnCard>()?;
    m.add_class::<PyDraw>()?;

    m.add_function(wrap_pyfunction!(py_draw, m)?)?;
    m.add_function(wrap_pyfunction!(py_normalize_seed, m)?)?;
    m.add_function(wrap_pyfunction!(py_generate_seed, m)?)?;
    m.add_function(wrap_pyfunction!(py_spread_ids, m)?)?;

    Ok(())
}
