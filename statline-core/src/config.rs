//! Compile-time configuration
//!
//! There is no runtime configuration: screen geometry, timings and
//! thresholds are constants, grouped into a [`Profile`] per firmware
//! flavour.

use statline_protocol::LineFormat;

use crate::alert::{AlertPolicy, Tone, ALERT_TONE};

/// Display width in pixels
pub const SCREEN_WIDTH: u16 = 128;

/// Display height in pixels
pub const SCREEN_HEIGHT: u16 = 64;

/// Pause between main loop iterations
pub const LOOP_INTERVAL_MS: u32 = 10;

/// Minimum gap between accepted button presses
pub const DEBOUNCE_MS: u32 = 200;

/// Animation frame interval (~21.7 fps)
pub const FRAME_INTERVAL_MS: u32 = 46;

/// How long stats stay up without new data before the animation takes over
pub const STATS_HOLD_MS: u32 = 5_000;

/// Length of one Pomodoro session
pub const POMODORO_DURATION_MS: u32 = 25 * 60 * 1000;

/// Timing constants used by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    pub debounce_ms: u32,
    pub frame_interval_ms: u32,
    pub stats_hold_ms: u32,
    pub pomodoro_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            frame_interval_ms: FRAME_INTERVAL_MS,
            stats_hold_ms: STATS_HOLD_MS,
            pomodoro_ms: POMODORO_DURATION_MS,
        }
    }
}

/// Firmware flavour
///
/// `classic` is the plain single-screen stats display with a level
/// alert; `deck` adds the idle animation, a tone alert and a Pomodoro
/// completion chime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Profile {
    /// Wire layout of incoming lines
    pub line_format: LineFormat,
    /// RAM usage alert behaviour
    pub alert: AlertPolicy,
    /// Whether idle stats fall through to the animation
    pub animation: bool,
    /// Redraw stats for every accepted line, even if nothing changed
    pub redraw_unchanged: bool,
    /// Tone played when a Pomodoro session runs out
    pub completion_chime: Option<Tone>,
    pub timing: Timing,
}

impl Profile {
    /// Stats + Pomodoro, 7-field lines, continuous alert above 80 %
    pub fn classic() -> Self {
        Self {
            line_format: LineFormat::Classic,
            alert: AlertPolicy::Level { threshold: 80 },
            animation: false,
            redraw_unchanged: false,
            completion_chime: None,
            timing: Timing::default(),
        }
    }

    /// Stats + Pomodoro + animation, 6-field lines, tone above 95 %
    pub fn deck() -> Self {
        Self {
            line_format: LineFormat::Deck,
            alert: AlertPolicy::Tone {
                threshold: 95,
                tone: ALERT_TONE,
            },
            animation: true,
            redraw_unchanged: true,
            completion_chime: Some(ALERT_TONE),
            timing: Timing::default(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::deck()
    }
}
