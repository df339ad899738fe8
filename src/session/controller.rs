//! Session controller: the placement state machine.
//!
//! ```text
//! Playing --(pending empties after a correct placement)--> Victory
//! Playing --(lives reach 0 after an incorrect placement)--> GameOver
//! Playing --(otherwise)--> Playing
//! ```
//!
//! A placement is judged immediately but only *resolved* when its
//! `FeedbackTicket` is handed back, normally by a timer after the feedback
//! delay. Until then input is locked. Starting a new session bumps the
//! generation, so tickets from the old session resolve to
//! `FeedbackResolution::Ignored`.

use std::time::Duration;

use tracing::{debug, info};

use super::state::{GameSession, Generation, Outcome, Phase, PlacementRecord};
use crate::cards::{Catalog, EventId, HistoricalEvent};
use crate::core::{GameRng, SessionConfig, Shuffler};
use crate::error::{ConfigError, PlacementError};
use crate::rules::{accepted_positions, candidate_timeline, is_chronological};

/// Proof that a placement was judged, redeemable once its delay elapses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackTicket {
    generation: Generation,
    sequence: u32,
    outcome: Outcome,
    delay: Duration,
}

impl FeedbackTicket {
    /// Session the placement belongs to.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Placement number within the session.
    #[must_use]
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// How the placement was judged.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// How long the outcome should be shown before resolving.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// What resolving a feedback window did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedbackResolution {
    /// The ticket was stale or already redeemed. Nothing changed.
    Ignored,
    /// Correct placement; this card is now awaiting placement.
    NextCard(EventId),
    /// Incorrect placement; the same card must be placed again.
    Retry(EventId),
    /// The last card was placed.
    Victory {
        /// Cards on the final timeline.
        score: usize,
    },
    /// The last life was lost.
    GameOver {
        /// Cards on the final timeline.
        score: usize,
    },
}

/// Owns the catalog, the randomness source and the live session.
///
/// ## Example
///
/// ```
/// use timeline_challenge::cards::{Catalog, EventId, HistoricalEvent};
/// use timeline_challenge::core::{IdentityShuffle, SessionConfig};
/// use timeline_challenge::session::{FeedbackResolution, Outcome, SessionController};
///
/// let catalog = Catalog::new(vec![
///     HistoricalEvent::new(EventId::new(1), "Moon Landing", 1969, ""),
///     HistoricalEvent::new(EventId::new(2), "End of WWII", 1945, ""),
///     HistoricalEvent::new(EventId::new(3), "First iPhone", 2007, ""),
/// ])
/// .unwrap();
///
/// let mut controller = SessionController::new(catalog, SessionConfig::new(), IdentityShuffle).unwrap();
///
/// // Timeline is [1969], current card is 1945
/// let ticket = controller.attempt_placement(0).unwrap();
/// assert_eq!(ticket.outcome(), Outcome::Correct);
///
/// let resolution = controller.resolve_feedback(&ticket);
/// assert_eq!(resolution, FeedbackResolution::NextCard(EventId::new(3)));
/// ```
#[derive(Clone, Debug)]
pub struct SessionController<S = GameRng> {
    catalog: Catalog,
    config: SessionConfig,
    shuffler: S,
    session: GameSession,
}

impl<S: Shuffler> SessionController<S> {
    /// Create a controller and deal the first session.
    pub fn new(catalog: Catalog, config: SessionConfig, shuffler: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut controller = Self {
            catalog,
            config,
            shuffler,
            session: GameSession::deal(Generation::default(), Vec::new(), 0),
        };
        controller.start_session();
        Ok(controller)
    }

    /// Discard the current session and deal a fresh one.
    ///
    /// Any feedback still pending from the old session becomes stale.
    pub fn start_session(&mut self) -> &GameSession {
        let generation = self.session.generation.next();

        let mut deck = self.catalog.events().to_vec();
        self.shuffler.shuffle(&mut deck);
        self.session = GameSession::deal(generation, deck, self.config.starting_lives);

        info!(
            generation = generation.raw(),
            events = self.catalog.len(),
            lives = self.session.lives,
            "session started"
        );
        &self.session
    }

    /// Try to place the current card at `position` on the timeline.
    ///
    /// On success the outcome is already applied (timeline committed or a
    /// life removed) and input stays locked until the returned ticket is
    /// passed to [`resolve_feedback`](Self::resolve_feedback). The judged
    /// card stays the current card for the whole feedback window, even once
    /// it is on the timeline. Rejections leave the session untouched.
    pub fn attempt_placement(&mut self, position: usize) -> Result<FeedbackTicket, PlacementError> {
        let session = &mut self.session;

        let card = match (&session.current_card, session.phase) {
            (Some(card), Phase::Playing) => card,
            _ => return Err(PlacementError::NoActiveCard),
        };
        if session.last_outcome != Outcome::Unknown {
            return Err(PlacementError::InputLocked);
        }
        if position > session.timeline.len() {
            return Err(PlacementError::InvalidPosition {
                position,
                len: session.timeline.len(),
            });
        }

        let card_id = card.id;
        let candidate = candidate_timeline(&session.timeline, card, position);
        let outcome = if is_chronological(&candidate) {
            session.timeline = candidate;
            Outcome::Correct
        } else {
            session.lives = session.lives.saturating_sub(1);
            Outcome::Incorrect
        };

        session.last_outcome = outcome;
        session.placements += 1;
        session.history.push_back(PlacementRecord {
            sequence: session.placements,
            card: card_id,
            position,
            outcome,
            lives_after: session.lives,
        });

        debug!(
            generation = session.generation.raw(),
            sequence = session.placements,
            card = card_id.raw(),
            position,
            %outcome,
            lives = session.lives,
            "placement judged"
        );

        Ok(FeedbackTicket {
            generation: session.generation,
            sequence: session.placements,
            outcome,
            delay: self.config.feedback_delay,
        })
    }

    /// Close the feedback window opened by `ticket`.
    ///
    /// Tickets from an earlier session, from an earlier placement, or that
    /// were already redeemed resolve to `Ignored` without touching state.
    pub fn resolve_feedback(&mut self, ticket: &FeedbackTicket) -> FeedbackResolution {
        let session = &mut self.session;

        if ticket.generation != session.generation
            || ticket.sequence != session.placements
            || session.phase.is_terminal()
            || session.last_outcome == Outcome::Unknown
        {
            debug!(
                ticket_generation = ticket.generation.raw(),
                ticket_sequence = ticket.sequence,
                generation = session.generation.raw(),
                sequence = session.placements,
                "stale feedback ignored"
            );
            return FeedbackResolution::Ignored;
        }

        let resolution = match session.last_outcome {
            Outcome::Correct => match session.pending.pop_front() {
                Some(next) => {
                    let id = next.id;
                    session.current_card = Some(next);
                    session.last_outcome = Outcome::Unknown;
                    FeedbackResolution::NextCard(id)
                }
                None => {
                    session.phase = Phase::Victory;
                    session.current_card = None;
                    FeedbackResolution::Victory {
                        score: session.score(),
                    }
                }
            },
            Outcome::Incorrect if session.lives == 0 => {
                session.phase = Phase::GameOver;
                session.current_card = None;
                FeedbackResolution::GameOver {
                    score: session.score(),
                }
            }
            Outcome::Incorrect => {
                session.last_outcome = Outcome::Unknown;
                match &session.current_card {
                    Some(card) => FeedbackResolution::Retry(card.id),
                    None => FeedbackResolution::Ignored,
                }
            }
            Outcome::Unknown => FeedbackResolution::Ignored,
        };

        match &resolution {
            FeedbackResolution::Victory { score } | FeedbackResolution::GameOver { score } => info!(
                generation = session.generation.raw(),
                phase = %session.phase,
                score,
                "session finished"
            ),
            _ => debug!(generation = session.generation.raw(), ?resolution, "feedback resolved"),
        }
        resolution
    }

    /// Slots in which the current card would be accepted.
    ///
    /// Empty when no card is awaiting placement or input is locked.
    #[must_use]
    pub fn accepted_positions(&self) -> Vec<usize> {
        match &self.session.current_card {
            Some(card) if !self.session.is_locked() => accepted_positions(&self.session.timeline, card),
            _ => Vec::new(),
        }
    }

    /// The live session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cheap copy of the live session for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> GameSession {
        self.session.clone()
    }

    /// The catalog sessions are dealt from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The randomness source, e.g. to read back a `GameRng` seed.
    #[must_use]
    pub fn shuffler(&self) -> &S {
        &self.shuffler
    }

    /// Look up a catalog event by id.
    #[must_use]
    pub fn event(&self, id: EventId) -> Option<&HistoricalEvent> {
        self.catalog.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IdentityShuffle;

    fn catalog(years: &[i32]) -> Catalog {
        let events = years
            .iter()
            .enumerate()
            .map(|(i, &year)| HistoricalEvent::new(EventId::new(i as u32 + 1), format!("E{}", i + 1), year, ""))
            .collect();
        Catalog::new(events).unwrap()
    }

    fn controller(years: &[i32]) -> SessionController<IdentityShuffle> {
        SessionController::new(catalog(years), SessionConfig::new(), IdentityShuffle).unwrap()
    }

    fn timeline_years(controller: &SessionController<IdentityShuffle>) -> Vec<i32> {
        controller.session().timeline().iter().map(|e| e.year).collect()
    }

    #[test]
    fn test_start_session() {
        let controller = controller(&[1969, 1945, 2007]);
        let session = controller.session();

        assert_eq!(session.generation(), Generation::new(1));
        assert_eq!(timeline_years(&controller), vec![1969]);
        assert_eq!(session.current_card().map(|e| e.year), Some(1945));
        assert_eq!(session.pending().len(), 1);
        assert_eq!(session.lives(), 3);
    }

    #[test]
    fn test_zero_lives_config_rejected() {
        let config = SessionConfig::new().with_starting_lives(0);
        let result = SessionController::new(catalog(&[1, 2]), config, IdentityShuffle);
        assert!(matches!(result, Err(ConfigError::NoLives)));
    }

    #[test]
    fn test_correct_placement_commits_and_locks() {
        let mut controller = controller(&[1969, 1945, 2007]);

        let ticket = controller.attempt_placement(0).unwrap();
        assert_eq!(ticket.outcome(), Outcome::Correct);
        assert_eq!(ticket.delay(), Duration::from_secs(1));

        let session = controller.session();
        assert_eq!(timeline_years(&controller), vec![1945, 1969]);
        assert_eq!(session.current_card().map(|e| e.year), Some(1945));
        assert!(session.is_locked());
        assert_eq!(session.lives(), 3);
        assert_eq!(session.remaining(), 1);
    }

    #[test]
    fn test_input_locked_after_correct_placement() {
        let mut controller = controller(&[1969, 1945, 2007]);
        let ticket = controller.attempt_placement(0).unwrap();
        assert_eq!(ticket.outcome(), Outcome::Correct);
        let before = controller.snapshot();

        assert_eq!(controller.attempt_placement(0), Err(PlacementError::InputLocked));
        assert_eq!(controller.attempt_placement(9), Err(PlacementError::InputLocked));
        assert_eq!(controller.snapshot(), before);

        assert_eq!(
            controller.resolve_feedback(&ticket),
            FeedbackResolution::NextCard(EventId::new(3))
        );
        assert_eq!(controller.session().current_card().map(|e| e.year), Some(2007));
        assert!(controller.attempt_placement(2).is_ok());
    }

    #[test]
    fn test_last_card_held_until_victory() {
        let mut controller = controller(&[1969, 1945]);
        let ticket = controller.attempt_placement(1).unwrap();
        assert_eq!(ticket.outcome(), Outcome::Incorrect);
        controller.resolve_feedback(&ticket);

        let ticket = controller.attempt_placement(0).unwrap();
        let session = controller.session();
        assert!(session.pending().is_empty());
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.current_card().map(|e| e.year), Some(1945));
        assert_eq!(session.remaining(), 0);
        assert_eq!(session.event_ids().count(), 2);

        controller.resolve_feedback(&ticket);
        assert_eq!(controller.session().phase(), Phase::Victory);
        assert!(controller.session().current_card().is_none());
    }

    #[test]
    fn test_incorrect_placement_costs_a_life() {
        let mut controller = controller(&[1969, 1945, 2007]);

        let ticket = controller.attempt_placement(1).unwrap();
        assert_eq!(ticket.outcome(), Outcome::Incorrect);

        let session = controller.session();
        assert_eq!(timeline_years(&controller), vec![1969]);
        assert_eq!(session.lives(), 2);
        assert_eq!(session.current_card().map(|e| e.year), Some(1945));

        assert_eq!(
            controller.resolve_feedback(&ticket),
            FeedbackResolution::Retry(EventId::new(2))
        );
        assert!(!controller.session().is_locked());
    }

    #[test]
    fn test_input_locked_during_feedback() {
        let mut controller = controller(&[1969, 1945, 2007]);
        controller.attempt_placement(1).unwrap();
        let before = controller.snapshot();

        assert_eq!(controller.attempt_placement(0), Err(PlacementError::InputLocked));
        assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn test_invalid_position_rejected() {
        let mut controller = controller(&[1969, 1945, 2007]);
        let before = controller.snapshot();

        assert_eq!(
            controller.attempt_placement(2),
            Err(PlacementError::InvalidPosition { position: 2, len: 1 })
        );
        assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn test_victory() {
        let mut controller = controller(&[1969, 1945]);

        let ticket = controller.attempt_placement(0).unwrap();
        assert_eq!(
            controller.resolve_feedback(&ticket),
            FeedbackResolution::Victory { score: 2 }
        );

        let session = controller.session();
        assert_eq!(session.phase(), Phase::Victory);
        assert!(session.current_card().is_none());
        assert_eq!(controller.attempt_placement(0), Err(PlacementError::NoActiveCard));
    }

    #[test]
    fn test_game_over() {
        let config = SessionConfig::new().with_starting_lives(1);
        let mut controller = SessionController::new(catalog(&[1969, 1945, 2007]), config, IdentityShuffle).unwrap();

        let ticket = controller.attempt_placement(1).unwrap();
        assert_eq!(controller.session().lives(), 0);
        assert_eq!(controller.session().phase(), Phase::Playing);

        assert_eq!(
            controller.resolve_feedback(&ticket),
            FeedbackResolution::GameOver { score: 1 }
        );
        assert_eq!(controller.session().phase(), Phase::GameOver);
        assert_eq!(controller.attempt_placement(0), Err(PlacementError::NoActiveCard));
    }

    #[test]
    fn test_ticket_redeemed_once() {
        let mut controller = controller(&[1969, 1945, 2007]);
        let ticket = controller.attempt_placement(0).unwrap();

        assert_ne!(controller.resolve_feedback(&ticket), FeedbackResolution::Ignored);
        let after = controller.snapshot();

        assert_eq!(controller.resolve_feedback(&ticket), FeedbackResolution::Ignored);
        assert_eq!(controller.snapshot(), after);
    }

    #[test]
    fn test_stale_ticket_after_restart() {
        let mut controller = controller(&[1969, 1945, 2007]);
        let ticket = controller.attempt_placement(0).unwrap();

        controller.start_session();
        let fresh = controller.snapshot();
        assert_eq!(fresh.generation(), Generation::new(2));

        assert_eq!(controller.resolve_feedback(&ticket), FeedbackResolution::Ignored);
        assert_eq!(controller.snapshot(), fresh);
    }

    #[test]
    fn test_history_records_placements() {
        let mut controller = controller(&[1969, 1945, 2007]);

        let ticket = controller.attempt_placement(1).unwrap();
        controller.resolve_feedback(&ticket);
        let ticket = controller.attempt_placement(0).unwrap();
        controller.resolve_feedback(&ticket);

        let history: Vec<_> = controller.session().history().iter().cloned().collect();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].outcome, Outcome::Incorrect);
        assert_eq!(history[0].lives_after, 2);
        assert_eq!(history[1].sequence, 2);
        assert_eq!(history[1].card, EventId::new(2));
        assert_eq!(history[1].outcome, Outcome::Correct);
    }

    #[test]
    fn test_accepted_positions() {
        let mut controller = controller(&[1969, 1945, 2007]);
        assert_eq!(controller.accepted_positions(), vec![0]);

        controller.attempt_placement(0).unwrap();
        assert!(controller.accepted_positions().is_empty());
    }
}
