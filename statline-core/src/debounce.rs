//! Button debouncing
//!
//! Edge-triggered and non-blocking: a press counts on the released →
//! pressed transition, and only if the previous accepted press is at
//! least the quiet interval old. Nothing here ever waits.

/// Debouncer for a single push button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    quiet_ms: u32,
    last_accepted: Option<u32>,
    was_pressed: bool,
}

impl Debouncer {
    /// Create a debouncer with the given quiet interval
    pub const fn new(quiet_ms: u32) -> Self {
        Self {
            quiet_ms,
            last_accepted: None,
            was_pressed: false,
        }
    }

    /// Feed the current button level
    ///
    /// Returns `true` when this sample is an accepted press.
    pub fn update(&mut self, pressed: bool, now: u32) -> bool {
        let rising = pressed && !self.was_pressed;
        self.was_pressed = pressed;

        if !rising {
            return false;
        }

        if let Some(last) = self.last_accepted {
            if now.wrapping_sub(last) < self.quiet_ms {
                return false;
            }
        }

        self.last_accepted = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEBOUNCE_MS;

    #[test]
    fn test_single_press() {
        let mut button = Debouncer::new(DEBOUNCE_MS);
        assert!(!button.update(false, 0));
        assert!(button.update(true, 10));
    }

    #[test]
    fn test_held_button_counts_once() {
        let mut button = Debouncer::new(DEBOUNCE_MS);
        assert!(button.update(true, 0));
        for t in (10..2_000).step_by(10) {
            assert!(!button.update(true, t));
        }
    }

    #[test]
    fn test_two_presses_within_quiet_interval() {
        let mut button = Debouncer::new(DEBOUNCE_MS);
        let samples = [(true, 0), (false, 30), (true, 60), (false, 90), (true, 199)];
        let accepted = samples
            .iter()
            .filter(|&&(level, t)| button.update(level, t))
            .count();
        assert_eq!(accepted, 1);
    }

    #[test]
    fn test_presses_after_quiet_interval() {
        let mut button = Debouncer::new(DEBOUNCE_MS);
        assert!(button.update(true, 0));
        assert!(!button.update(false, 100));
        assert!(button.update(true, 200));
    }
}
