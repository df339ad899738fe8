//! Chronological placement rule.
//!
//! A placement is judged by inserting the card into a copy of the timeline
//! and checking the result is non-decreasing by year. Equal years are
//! accepted on either side, so a card tying a neighbour has more than one
//! correct slot.

use im::Vector;

use crate::cards::HistoricalEvent;

/// Insert `card` at `position` in a copy of `timeline`.
///
/// `position` must be in `0..=timeline.len()`.
#[must_use]
pub fn candidate_timeline(
    timeline: &Vector<HistoricalEvent>,
    card: &HistoricalEvent,
    position: usize,
) -> Vector<HistoricalEvent> {
    let mut candidate = timeline.clone();
    candidate.insert(position, card.clone());
    candidate
}

/// Check that every event is no earlier than the one before it.
pub fn is_chronological<'a, I>(events: I) -> bool
where
    I: IntoIterator<Item = &'a HistoricalEvent>,
{
    let mut previous: Option<i32> = None;
    for event in events {
        if previous.is_some_and(|year| event.year < year) {
            return false;
        }
        previous = Some(event.year);
    }
    true
}

/// Every slot in which `card` would be judged correct.
///
/// Assumes `timeline` is already chronological, which holds for any
/// timeline a session builds.
#[must_use]
pub fn accepted_positions(timeline: &Vector<HistoricalEvent>, card: &HistoricalEvent) -> Vec<usize> {
    (0..=timeline.len())
        .filter(|&position| {
            let after_previous = position == 0 || timeline[position - 1].year <= card.year;
            let before_next = position == timeline.len() || card.year <= timeline[position].year;
            after_previous && before_next
        })
        .collect()
}
