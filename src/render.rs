//! Plain-text rendering of a session for terminal play.
//!
//! The timeline is drawn with numbered slots between cards; the player
//! answers with a slot number.

use std::fmt::Write;

use crate::cards::HistoricalEvent;
use crate::session::{FeedbackResolution, GameSession, Outcome, Phase};

/// Render the whole screen for `session`.
#[must_use]
pub fn render_session(session: &GameSession) -> String {
    match session.phase() {
        Phase::Victory => render_victory(session),
        Phase::GameOver => render_game_over(session),
        Phase::Playing => render_board(session),
    }
}

/// Header, current card and the timeline with slot numbers.
#[must_use]
pub fn render_board(session: &GameSession) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Timeline Challenge ===");
    let _ = writeln!(
        out,
        "Lives: {}   Remaining: {}",
        session.lives(),
        session.remaining()
    );
    let _ = writeln!(out);

    match (session.current_card(), session.last_outcome()) {
        (Some(card), Outcome::Correct) => {
            let _ = writeln!(out, "Placed: \"{}\" ({})", card.title, card.year);
        }
        (Some(card), _) => {
            let _ = writeln!(out, "Place this event: {}", card_face(card));
            let _ = writeln!(out, "  {}", card.description);
        }
        (None, _) => {
            let _ = writeln!(out, "No card in play.");
        }
    }
    let _ = writeln!(out);

    for (position, event) in session.timeline().iter().enumerate() {
        let _ = writeln!(out, "  [{}]", position);
        let _ = writeln!(out, "      {} - {}", event.year, event.title);
    }
    let _ = writeln!(out, "  [{}]", session.timeline().len());

    out
}

/// End screen after every card was placed.
#[must_use]
pub fn render_victory(session: &GameSession) -> String {
    format!(
        "*** Victory! ***\nEvery event is in order. Score: {}\nPress n for a new game or q to quit.\n",
        session.score()
    )
}

/// End screen after the last life was lost.
#[must_use]
pub fn render_game_over(session: &GameSession) -> String {
    format!(
        "*** Game Over ***\nYou ran out of lives. Score: {}\nPress n for a new game or q to quit.\n",
        session.score()
    )
}

/// One-line verdict shown during the feedback window.
#[must_use]
pub fn render_outcome(outcome: Outcome, session: &GameSession) -> String {
    match outcome {
        Outcome::Correct => "Correct!".to_string(),
        Outcome::Incorrect => format!("Wrong! Lives left: {}", session.lives()),
        Outcome::Unknown => String::new(),
    }
}

/// Short line describing a resolved feedback window.
#[must_use]
pub fn render_resolution(resolution: &FeedbackResolution) -> Option<&'static str> {
    match resolution {
        FeedbackResolution::Retry(_) => Some("Try that card again."),
        FeedbackResolution::NextCard(_) => Some("Next card!"),
        _ => None,
    }
}

fn card_face(card: &HistoricalEvent) -> String {
    format!("\"{}\" (year hidden)", card.title)
}
