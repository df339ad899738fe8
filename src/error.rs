//! Error types for the `timeline-challenge` crate.
//!
//! Every rejection is local and recoverable: a failed placement leaves the
//! session exactly as it was.

use crate::cards::EventId;

/// Reasons a placement attempt is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The slot index is outside `0..=len`.
    #[error("position {position} is outside the timeline (valid slots are 0..={len})")]
    InvalidPosition {
        /// Requested slot.
        position: usize,
        /// Current timeline length.
        len: usize,
    },

    /// No card is waiting to be placed, e.g. after the session ended.
    #[error("no card is awaiting placement")]
    NoActiveCard,

    /// The previous placement is still being shown.
    #[error("input is locked until the previous placement resolves")]
    InputLocked,
}

/// Errors building or loading an event catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two events share an id.
    #[error("duplicate event id: {0}")]
    DuplicateId(EventId),

    /// Not enough events to deal a session.
    #[error("catalog has {found} events, at least {required} are required")]
    TooFewEvents {
        /// Events supplied.
        found: usize,
        /// Minimum for a playable session.
        required: usize,
    },

    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a JSON array of events.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid session configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A session needs at least one life.
    #[error("starting lives must be at least 1")]
    NoLives,
}
