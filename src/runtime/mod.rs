//! Async runtime around the session controller (tokio).
//!
//! - `FeedbackScheduler`: one sleeping task per judged placement
//! - `GameDriver`: single task owning the controller, fed by commands and
//!   expired timers

pub mod driver;
pub mod scheduler;

pub use driver::{spawn, Command, DriverHandle, GameDriver, Update};
pub use scheduler::FeedbackScheduler;
