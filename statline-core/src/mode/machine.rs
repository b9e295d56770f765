//! Mode definition
//!
//! What is drawn each loop iteration is a function of the current mode.

use super::events::Event;
use crate::config::Profile;

/// Screen to go back to when the Pomodoro is dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resume {
    Stats,
    Animation,
}

/// Display modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// System metrics
    Stats,
    /// Idle animation loop
    Animation,
    /// Pomodoro countdown, remembering the screen it replaced
    Pomodoro { resume: Resume },
}

impl From<Resume> for Mode {
    fn from(resume: Resume) -> Self {
        match resume {
            Resume::Stats => Mode::Stats,
            Resume::Animation => Mode::Animation,
        }
    }
}

impl Mode {
    /// Check if the Pomodoro screen is up
    pub fn is_pomodoro(&self) -> bool {
        matches!(self, Mode::Pomodoro { .. })
    }

    /// Check if two modes show the same screen
    ///
    /// `Pomodoro` modes differing only in their resume target draw the
    /// same thing.
    pub fn same_screen(&self, other: &Mode) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Stats => "stats",
            Mode::Animation => "animation",
            Mode::Pomodoro { .. } => "pomodoro",
        }
    }

    /// Process an event and return the next mode
    ///
    /// This is the complete transition table.
    pub fn transition(self, event: Event, profile: &Profile) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            // Button toggles the Pomodoro over whatever is showing
            (Stats, ButtonPressed) => Pomodoro {
                resume: Resume::Stats,
            },
            (Animation, ButtonPressed) => Pomodoro {
                resume: Resume::Animation,
            },
            (Pomodoro { resume }, ButtonPressed) => resume.into(),

            // Fresh data always brings the stats back
            (Stats | Animation, StatsReceived) => Stats,
            // ...except over a running Pomodoro, which returns to them later
            (Pomodoro { .. }, StatsReceived) => Pomodoro {
                resume: Resume::Stats,
            },

            // Idle stats fall through to the animation
            (Stats, StatsHoldElapsed) if profile.animation => Animation,

            // Default: stay in current mode
            _ => self,
        }
    }
}
