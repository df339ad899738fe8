//! Event catalog - the read-only deck sessions are dealt from.
//!
//! A `Catalog` keeps its events in a fixed order and guarantees that ids
//! are unique. It can be swapped (another language, another era) without
//! touching the session logic.

use std::path::Path;

use rustc_hash::FxHashMap;

use super::builtin;
use super::event::{EventId, HistoricalEvent};
use crate::error::CatalogError;

/// Smallest deck that can be dealt: one event seeds the timeline and one
/// becomes the first card to place.
pub const MIN_CATALOG_SIZE: usize = 2;

/// Ordered, unique-by-id collection of events.
///
/// ## Example
///
/// ```
/// use timeline_challenge::cards::{Catalog, EventId, HistoricalEvent};
///
/// let catalog = Catalog::new(vec![
///     HistoricalEvent::new(EventId::new(1), "First Moon Landing", 1969, "Apollo 11"),
///     HistoricalEvent::new(EventId::new(2), "Titanic Sinks", 1912, "Maiden voyage"),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(EventId::new(2)).unwrap().year, 1912);
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    events: Vec<HistoricalEvent>,
    index: FxHashMap<EventId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and decks too small to play.
    pub fn new(events: Vec<HistoricalEvent>) -> Result<Self, CatalogError> {
        if events.len() < MIN_CATALOG_SIZE {
            return Err(CatalogError::TooFewEvents {
                found: events.len(),
                required: MIN_CATALOG_SIZE,
            });
        }

        let mut index = FxHashMap::default();
        for (position, event) in events.iter().enumerate() {
            if index.insert(event.id, position).is_some() {
                return Err(CatalogError::DuplicateId(event.id));
            }
        }

        Ok(Self { events, index })
    }

    /// The fifteen events the game ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let events = builtin::events();
        let index = events
            .iter()
            .enumerate()
            .map(|(position, event)| (event.id, position))
            .collect();
        Self { events, index }
    }

    /// Parse a JSON array of events.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let events: Vec<HistoricalEvent> = serde_json::from_str(json)?;
        Self::new(events)
    }

    /// Load a JSON array of events from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Get an event by ID.
    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&HistoricalEvent> {
        self.index.get(&id).map(|&position| &self.events[position])
    }

    /// Check if an event ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: EventId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog has no events. Always false once constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events in catalog order.
    #[must_use]
    pub fn events(&self) -> &[HistoricalEvent] {
        &self.events
    }

    /// Iterate over events in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &HistoricalEvent> {
        self.events.iter()
    }
}
