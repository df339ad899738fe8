//! Python bindings for the timeline-challenge engine.
//!
//! Exposes the session controller so bots and notebooks can play the game.
//!
//! # Quick Start
//!
//! ```python
//! import timeline_challenge as tc
//!
//! game = tc.TimelineGame(seed=42)
//!
//! # Slots where the current card would be accepted
//! slot = game.accepted_positions()[0]
//!
//! correct = game.place(slot)
//! game.resolve()  # "next_card", "retry", "victory" or "gameover"
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// timeline_challenge: chronological card placement game.
#[pymodule]
fn timeline_challenge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTimelineGame>()?;

    Ok(())
}
