//! Per-iteration input and output of the scheduler

use statline_protocol::{LineError, ParseError};

use crate::alert::{AlertOutput, Tone};
use crate::pomodoro::PomodoroView;

/// What the main loop observed this iteration
#[derive(Debug, Clone, Copy, Default)]
pub struct Input<'a> {
    /// Button level (already converted to "pressed")
    pub button_down: bool,
    /// A complete serial line, or the reason one was dropped
    pub line: Option<Result<&'a str, LineError>>,
}

impl<'a> Input<'a> {
    /// Input with only a button sample
    pub fn button(button_down: bool) -> Self {
        Self {
            button_down,
            line: None,
        }
    }

    /// Attach a received line
    pub fn with_line(mut self, line: &'a str) -> Self {
        self.line = Some(Ok(line));
        self
    }

    /// Attach a line framing error
    pub fn with_line_error(mut self, error: LineError) -> Self {
        self.line = Some(Err(error));
        self
    }
}

/// Screen to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Render {
    /// Stats screen from the scheduler's snapshot
    Stats,
    /// Pomodoro screen
    Pomodoro(PomodoroView),
    /// Animation frame by index
    Animation(usize),
}

/// Why an input line was thrown away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejected {
    Line(LineError),
    Parse(ParseError),
}

/// Outcome of one scheduler iteration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    /// Screen to draw, if anything changed
    pub render: Option<Render>,
    /// New alert state after a stats update
    pub alert: Option<AlertOutput>,
    /// Tone to play because a Pomodoro ran out
    pub chime: Option<Tone>,
    /// Line dropped this iteration (for logging)
    pub rejected: Option<Rejected>,
}
