//! Historical events - the cards of the game.
//!
//! A `HistoricalEvent` is immutable once loaded. Sessions copy events
//! between the pending pile, the current card slot and the timeline but
//! never modify them.

use serde::{Deserialize, Serialize};

/// Unique identifier for an event within a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl EventId {
    /// Create a new event ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Event({})", self.0)
    }
}

/// A dated historical event.
///
/// Years are signed so that BCE events can be expressed as negative years.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoricalEvent {
    /// Catalog-unique identifier.
    pub id: EventId,

    /// Short headline shown on the card.
    pub title: String,

    /// Year the event happened. The only field placement is judged on.
    pub year: i32,

    /// One-line description shown under the title.
    pub description: String,
}

impl HistoricalEvent {
    /// Create a new event.
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        year: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_id() {
        let id = EventId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Event(7)");
    }

    #[test]
    fn test_json_shape() {
        let event = HistoricalEvent::new(EventId::new(5), "End of World War II", 1945, "Japan surrenders");

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["year"], 1945);
        assert_eq!(json["title"], "End of World War II");

        let back: HistoricalEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
