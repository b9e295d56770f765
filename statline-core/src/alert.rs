//! RAM usage alert
//!
//! A pure threshold function: the output depends only on the most
//! recent RAM reading, so re-applying it never accumulates anything.

use statline_hal::Buzzer;
use statline_protocol::percent;

/// A timed tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    pub freq_hz: u16,
    pub duration_ms: u16,
}

/// Tone used for alerts and the Pomodoro chime
pub const ALERT_TONE: Tone = Tone {
    freq_hz: 1000,
    duration_ms: 500,
};

/// How high RAM usage is signalled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertPolicy {
    /// Hold the alert line high while usage exceeds `threshold`
    Level { threshold: u8 },
    /// Beep once per reading above `threshold`
    Tone { threshold: u8, tone: Tone },
}

/// What the buzzer should do after a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertOutput {
    /// Drive the line to a steady level
    Level(bool),
    /// Play a tone
    Tone(Tone),
    /// Stop any tone
    Silence,
}

impl AlertPolicy {
    /// Usage percentage above which the alert fires
    pub fn threshold(&self) -> u8 {
        match *self {
            AlertPolicy::Level { threshold } | AlertPolicy::Tone { threshold, .. } => threshold,
        }
    }

    /// Evaluate a RAM usage field
    pub fn evaluate(&self, ram_usage: &str) -> AlertOutput {
        let high = percent(ram_usage) > self.threshold();
        match *self {
            AlertPolicy::Level { .. } => AlertOutput::Level(high),
            AlertPolicy::Tone { tone, .. } if high => AlertOutput::Tone(tone),
            AlertPolicy::Tone { .. } => AlertOutput::Silence,
        }
    }
}

impl AlertOutput {
    /// Drive a buzzer to this output
    pub fn apply<B: Buzzer>(&self, buzzer: &mut B) {
        match *self {
            AlertOutput::Level(on) => buzzer.set_level(on),
            AlertOutput::Tone(tone) => buzzer.tone(tone.freq_hz, tone.duration_ms),
            AlertOutput::Silence => buzzer.silence(),
        }
    }

    /// Check if this output makes noise
    pub fn is_active(&self) -> bool {
        matches!(self, AlertOutput::Level(true) | AlertOutput::Tone(_))
    }
}
