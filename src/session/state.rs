//! Session state: everything that changes during one play-through.
//!
//! ## Partition
//!
//! While a session is `Playing`, every catalog event sits in exactly one of
//! `timeline`, `pending` or `current_card`. The current card is never part
//! of `pending`; on a correct placement it moves straight into the timeline.
//!
//! ## Snapshots
//!
//! Sequences use `im` persistent vectors, so cloning a `GameSession` to hand
//! a snapshot to the presentation layer is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{EventId, HistoricalEvent};

/// Session identity, bumped every time a new session is dealt.
///
/// Feedback tickets carry the generation they were issued in so a timer
/// from an abandoned session cannot touch its replacement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// Create a generation from a raw counter.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The following generation.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Get the raw counter.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// Coarse game state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Cards remain to be placed.
    #[default]
    Playing,
    /// Every card was placed. Terminal.
    Victory,
    /// All lives were lost. Terminal.
    GameOver,
}

impl Phase {
    /// Victory and GameOver accept nothing but a new session.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Playing => "playing",
            Phase::Victory => "victory",
            Phase::GameOver => "gameover",
        };
        f.write_str(name)
    }
}

/// Result of the most recent placement.
///
/// Anything other than `Unknown` means a feedback window is open and input
/// is locked until it resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No placement awaiting resolution.
    #[default]
    Unknown,
    /// The card landed in a chronological slot.
    Correct,
    /// The card was rejected and a life was lost.
    Incorrect,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::Unknown => "unknown",
            Outcome::Correct => "correct",
            Outcome::Incorrect => "incorrect",
        };
        f.write_str(name)
    }
}

/// Record of one evaluated placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// 1-based placement number within the session.
    pub sequence: u32,
    /// Card that was placed.
    pub card: EventId,
    /// Slot it was placed in.
    pub position: usize,
    /// How it was judged.
    pub outcome: Outcome,
    /// Lives left after the judgement.
    pub lives_after: u32,
}

/// One play-through, from deal to a terminal phase.
///
/// Fields are read-only outside the crate; all mutation goes through
/// `SessionController`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) generation: Generation,
    pub(crate) lives: u32,
    pub(crate) timeline: Vector<HistoricalEvent>,
    pub(crate) pending: Vector<HistoricalEvent>,
    pub(crate) current_card: Option<HistoricalEvent>,
    pub(crate) phase: Phase,
    pub(crate) last_outcome: Outcome,
    pub(crate) placements: u32,
    pub(crate) history: Vector<PlacementRecord>,
}

impl GameSession {
    /// Deal a session from an already shuffled deck.
    ///
    /// The first event seeds the timeline, the second becomes the current
    /// card and the rest are pending. `deck` must hold at least two events.
    pub(crate) fn deal(generation: Generation, deck: Vec<HistoricalEvent>, lives: u32) -> Self {
        let mut deck: Vector<HistoricalEvent> = deck.into_iter().collect();
        let timeline: Vector<HistoricalEvent> = deck.pop_front().into_iter().collect();
        let current_card = deck.pop_front();

        Self {
            generation,
            lives,
            timeline,
            pending: deck,
            current_card,
            phase: Phase::Playing,
            last_outcome: Outcome::Unknown,
            placements: 0,
            history: Vector::new(),
        }
    }

    /// Identity of this session.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Lives left.
    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// The player's chronological sequence so far.
    #[must_use]
    pub fn timeline(&self) -> &Vector<HistoricalEvent> {
        &self.timeline
    }

    /// Events not yet drawn. Never includes the current card.
    ///
    /// This empties as soon as the last card is drawn, while that card is
    /// still in play, so an empty pile does not mean `Victory`. Use
    /// [`remaining`](Self::remaining) for the number of cards left to place.
    #[must_use]
    pub fn pending(&self) -> &Vector<HistoricalEvent> {
        &self.pending
    }

    /// The card being placed.
    ///
    /// After a correct placement it stays here until the feedback window
    /// resolves, although it is already on the timeline.
    #[must_use]
    pub fn current_card(&self) -> Option<&HistoricalEvent> {
        self.current_card.as_ref()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Result of the latest placement, `Unknown` once it has resolved.
    #[must_use]
    pub fn last_outcome(&self) -> Outcome {
        self.last_outcome
    }

    /// Whether a feedback window is open.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.last_outcome != Outcome::Unknown
    }

    /// Number of placements evaluated so far.
    #[must_use]
    pub fn placements(&self) -> u32 {
        self.placements
    }

    /// Every evaluated placement, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<PlacementRecord> {
        &self.history
    }

    /// Cards still to place, counting the current one unless it was just
    /// placed correctly.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len() + usize::from(self.uncommitted_card().is_some())
    }

    /// Score shown at the end of a session: cards on the timeline.
    #[must_use]
    pub fn score(&self) -> usize {
        self.timeline.len()
    }

    /// Ids of every event the session holds, in no particular order.
    ///
    /// Each id appears once: a correctly placed current card is only counted
    /// on the timeline.
    pub fn event_ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.timeline
            .iter()
            .chain(self.pending.iter())
            .chain(self.uncommitted_card())
            .map(|event| event.id)
    }

    fn uncommitted_card(&self) -> Option<&HistoricalEvent> {
        self.current_card
            .as_ref()
            .filter(|_| self.last_outcome != Outcome::Correct)
    }
}
