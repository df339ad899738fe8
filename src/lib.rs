//! # timeline-challenge
//!
//! A chronological card placement game engine.
//!
//! The player is dealt a shuffled deck of historical events. One event
//! starts the timeline; the rest are drawn one at a time and must be slotted
//! into chronological order. A wrong slot costs a life. Place every card to
//! win, lose every life and the game is over.
//!
//! ## Design Principles
//!
//! 1. **One owner**: a single `SessionController` holds all mutable state
//!    and exposes one state-changing operation (place) plus a reset.
//!
//! 2. **Explicit input lock**: each placement opens a feedback window that
//!    must be resolved with its `FeedbackTicket` before the next one.
//!
//! 3. **Session identity**: tickets carry the session generation, so a
//!    timer firing after a restart cannot corrupt the new session.
//!
//! 4. **Injected randomness**: dealing goes through the `Shuffler` trait;
//!    tests pin the deal with `IdentityShuffle`.
//!
//! ## Modules
//!
//! - `core`: RNG, shuffling, session configuration
//! - `cards`: Historical events and the catalog
//! - `rules`: Chronological placement validation
//! - `session`: Session state and the controller state machine
//! - `runtime`: tokio feedback timers and the single-owner driver
//! - `render`: Plain-text screens for terminal play

pub mod cards;
pub mod core;
pub mod error;
pub mod logging;
pub mod render;
pub mod rules;
pub mod runtime;
pub mod session;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{GameRng, IdentityShuffle, SessionConfig, Shuffler};

pub use crate::cards::{Catalog, EventId, HistoricalEvent};

pub use crate::error::{CatalogError, ConfigError, PlacementError};

pub use crate::session::{
    FeedbackResolution, FeedbackTicket, GameSession, Generation, Outcome, Phase, PlacementRecord,
    SessionController,
};

pub use crate::runtime::{Command, DriverHandle, GameDriver, Update};

pub use crate::logging::init_logging;
