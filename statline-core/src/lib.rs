//! Board-agnostic core logic for the Statline status display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Display mode state machine (stats, Pomodoro, animation)
//! - Cooperative scheduler tying input, timers and rendering together
//! - Pomodoro countdown and animation frame timing
//! - RAM usage alert policy
//! - Button debouncing
//! - Compile-time configuration profiles
//!
//! Everything here runs on the host for tests; time is passed in as
//! millisecond timestamps rather than read from a clock.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod alert;
pub mod animation;
pub mod config;
pub mod debounce;
pub mod mode;
pub mod pomodoro;
pub mod scheduler;
pub mod serial;

pub use config::Profile;
pub use mode::{Event, Mode};
pub use scheduler::{Input, Render, Scheduler, Step};
