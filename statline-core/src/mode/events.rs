//! Events that trigger mode transitions

/// Events that can trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Debounced button press
    ButtonPressed,
    /// A stats line was parsed successfully
    StatsReceived,
    /// Stats have been on screen for the hold time without new data
    StatsHoldElapsed,
}
