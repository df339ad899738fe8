//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{Catalog, HistoricalEvent};
use crate::core::{GameRng, SessionConfig};
use crate::session::{FeedbackResolution, FeedbackTicket, Outcome, SessionController};

/// `(id, title, year, description)` as seen from Python.
type PyEvent = (u32, String, i32, String);

fn to_py_event(event: &HistoricalEvent) -> PyEvent {
    (
        event.id.raw(),
        event.title.clone(),
        event.year,
        event.description.clone(),
    )
}

/// Python wrapper for a session controller over the built-in catalog.
///
/// Feedback is resolved explicitly with `resolve()` instead of a timer.
#[pyclass(name = "TimelineGame")]
pub struct PyTimelineGame {
    controller: SessionController<GameRng>,
    ticket: Option<FeedbackTicket>,
}

#[pymethods]
impl PyTimelineGame {
    /// Create a game and deal the first session.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible deals (random if omitted)
    /// - lives: Lives at the start of each session
    #[new]
    #[pyo3(signature = (seed = None, lives = 3))]
    fn new(seed: Option<u64>, lives: u32) -> PyResult<Self> {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let config = SessionConfig::new().with_starting_lives(lives);
        let controller = SessionController::new(Catalog::builtin(), config, rng)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            controller,
            ticket: None,
        })
    }

    /// Deal a new session, discarding the current one.
    fn start(&mut self) {
        self.controller.start_session();
        self.ticket = None;
    }

    /// Place the current card at `position`.
    ///
    /// Returns True if the placement was correct. Raises ValueError if the
    /// placement was refused.
    fn place(&mut self, position: usize) -> PyResult<bool> {
        let ticket = self
            .controller
            .attempt_placement(position)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let correct = ticket.outcome() == Outcome::Correct;
        self.ticket = Some(ticket);
        Ok(correct)
    }

    /// Close the feedback window of the last placement.
    ///
    /// Returns "next_card", "retry", "victory", "gameover", or "ignored"
    /// when there is nothing to resolve.
    fn resolve(&mut self) -> &'static str {
        let Some(ticket) = self.ticket.take() else {
            return "ignored";
        };
        match self.controller.resolve_feedback(&ticket) {
            FeedbackResolution::Ignored => "ignored",
            FeedbackResolution::NextCard(_) => "next_card",
            FeedbackResolution::Retry(_) => "retry",
            FeedbackResolution::Victory { .. } => "victory",
            FeedbackResolution::GameOver { .. } => "gameover",
        }
    }

    /// Slots where the current card would be accepted.
    fn accepted_positions(&self) -> Vec<usize> {
        self.controller.accepted_positions()
    }

    /// Lives left.
    #[getter]
    fn lives(&self) -> u32 {
        self.controller.session().lives()
    }

    /// "playing", "victory" or "gameover".
    #[getter]
    fn phase(&self) -> String {
        self.controller.session().phase().to_string()
    }

    /// Cards still to place, counting the current one.
    #[getter]
    fn remaining(&self) -> usize {
        self.controller.session().remaining()
    }

    /// Cards on the timeline.
    #[getter]
    fn score(&self) -> usize {
        self.controller.session().score()
    }

    /// The timeline as `(id, title, year, description)` tuples.
    #[getter]
    fn timeline(&self) -> Vec<PyEvent> {
        self.controller.session().timeline().iter().map(to_py_event).collect()
    }

    /// The card awaiting placement, if any.
    #[getter]
    fn current_card(&self) -> Option<PyEvent> {
        self.controller.session().current_card().map(to_py_event)
    }

    /// Seed of the RNG, for replaying a deal.
    #[getter]
    fn seed(&self) -> u64 {
        self.controller.shuffler().seed()
    }

    fn __repr__(&self) -> String {
        let session = self.controller.session();
        format!(
            "TimelineGame(phase={}, lives={}, remaining={}, score={})",
            session.phase(),
            session.lives(),
            session.remaining(),
            session.score()
        )
    }
}
