//! Placement rules.
//!
//! The session controller asks the rules whether a candidate timeline is
//! acceptable but never interprets years itself.

pub mod chronology;

pub use chronology::{accepted_positions, candidate_timeline, is_chronological};
