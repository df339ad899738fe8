//! Built-in event deck.

use super::event::{EventId, HistoricalEvent};

const EVENTS: [(u32, &str, i32, &str); 15] = [
    (1, "First Moon Landing", 1969, "Apollo 11 mission successfully lands on the Moon"),
    (2, "Fall of Berlin Wall", 1989, "The Berlin Wall falls, marking the end of the Cold War era"),
    (3, "World Wide Web Invented", 1989, "Tim Berners-Lee invents the World Wide Web"),
    (4, "First iPhone Released", 2007, "Apple releases the first iPhone, revolutionizing smartphones"),
    (5, "End of World War II", 1945, "World War II ends with Japan's surrender"),
    (6, "Titanic Sinks", 1912, "RMS Titanic sinks on its maiden voyage"),
    (7, "Wright Brothers First Flight", 1903, "First successful powered airplane flight"),
    (8, "Discovery of Penicillin", 1928, "Alexander Fleming discovers penicillin"),
    (9, "First Human in Space", 1961, "Yuri Gagarin becomes the first human in space"),
    (10, "Stock Market Crash", 1929, "Wall Street Crash leads to the Great Depression"),
    (11, "First TV Broadcast", 1927, "First long-distance television broadcast"),
    (12, "Facebook Founded", 2004, "Mark Zuckerberg launches Facebook"),
    (13, "Einstein's Theory of Relativity", 1915, "Einstein publishes General Theory of Relativity"),
    (14, "Netflix Founded", 1997, "Netflix launches as a DVD rental service"),
    (15, "Google Founded", 1998, "Larry Page and Sergey Brin found Google"),
];

pub(crate) fn events() -> Vec<HistoricalEvent> {
    EVENTS
        .iter()
        .map(|&(id, title, year, description)| {
            HistoricalEvent::new(EventId::new(id), title, year, description)
        })
        .collect()
}
