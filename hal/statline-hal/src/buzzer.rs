//! Alert output abstraction
//!
//! A buzzer either holds a steady level (active buzzer or vibration motor)
//! or plays a timed tone (passive piezo). Both must return immediately;
//! timing is the implementation's business.

/// Audible/tactile alert output
pub trait Buzzer {
    /// Drive the alert line continuously on or off
    fn set_level(&mut self, on: bool);

    /// Start a tone of `freq_hz` lasting `duration_ms`
    ///
    /// Must not block the caller. A new call replaces any tone in progress.
    fn tone(&mut self, freq_hz: u16, duration_ms: u16);

    /// Stop any tone and release the line
    fn silence(&mut self);
}
