//! Core engine types: randomness and session configuration.
//!
//! Nothing here knows about timelines; the session module builds on these.

pub mod config;
pub mod rng;

pub use config::{SessionConfig, DEFAULT_FEEDBACK_DELAY, DEFAULT_STARTING_LIVES};
pub use rng::{GameRng, IdentityShuffle, Shuffler};
