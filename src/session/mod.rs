//! Game sessions: state and the controller that drives it.
//!
//! - `GameSession`: lives, timeline, pending pile, current card, phase
//! - `SessionController`: deals sessions and judges placements
//! - `FeedbackTicket`: ties a judged placement to the session it came from

pub mod controller;
pub mod state;

pub use controller::{FeedbackResolution, FeedbackTicket, SessionController};
pub use state::{GameSession, Generation, Outcome, Phase, PlacementRecord};
