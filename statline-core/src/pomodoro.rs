//! Pomodoro countdown
//!
//! A session only remembers when it started. Everything shown on screen
//! is derived from `now - started_at`, clamped to the session length, so
//! the countdown can never run past zero.

/// A running Pomodoro session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PomodoroSession {
    started_at: u32,
    duration_ms: u32,
    /// Completion already reported
    finished: bool,
}

/// What the Pomodoro screen shows at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PomodoroView {
    /// Whole minutes remaining
    pub minutes: u32,
    /// Seconds remaining within the minute (0-59)
    pub seconds: u8,
    /// Clamped elapsed time
    pub elapsed_ms: u32,
    pub duration_ms: u32,
}

impl PomodoroSession {
    /// Start a session at `now`
    pub fn start(now: u32, duration_ms: u32) -> Self {
        Self {
            started_at: now,
            duration_ms,
            finished: false,
        }
    }

    /// Elapsed time, clamped to `[0, duration]`
    ///
    /// Uses wrapping arithmetic so a millisecond counter rollover does not
    /// disturb a running session.
    pub fn elapsed(&self, now: u32) -> u32 {
        now.wrapping_sub(self.started_at).min(self.duration_ms)
    }

    /// Screen contents at `now`
    pub fn view(&self, now: u32) -> PomodoroView {
        let elapsed_ms = self.elapsed(now);
        let remaining = self.duration_ms - elapsed_ms;
        PomodoroView {
            minutes: remaining / 60_000,
            seconds: ((remaining % 60_000) / 1000) as u8,
            elapsed_ms,
            duration_ms: self.duration_ms,
        }
    }

    /// Report completion
    ///
    /// Returns `true` exactly once per session: on the first call where
    /// no time remains.
    pub fn poll_finished(&mut self, now: u32) -> bool {
        if self.finished || self.elapsed(now) < self.duration_ms {
            return false;
        }
        self.finished = true;
        true
    }
}

impl PomodoroView {
    /// Time left in milliseconds
    pub fn remaining_ms(&self) -> u32 {
        self.duration_ms - self.elapsed_ms
    }

    /// Check if the countdown reached zero
    pub fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Progress bar fill for a bar `width` pixels wide
    pub fn bar_width(&self, width: u16) -> u16 {
        if self.duration_ms == 0 {
            return width;
        }
        ((self.elapsed_ms as u64 * width as u64) / self.duration_ms as u64) as u16
    }

    /// Check if two views draw identically on a bar `width` pixels wide
    pub fn same_frame(&self, other: &PomodoroView, width: u16) -> bool {
        self.minutes == other.minutes
            && self.seconds == other.seconds
            && self.bar_width(width) == other.bar_width(width)
    }
}
