//! Display mode state machine
//!
//! Exactly one screen is active at a time. The mode is an explicit,
//! finite, deterministic function of the previous mode and an event.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{Mode, Resume};
