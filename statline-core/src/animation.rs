//! Looping bitmap animation timing
//!
//! The player only tracks which frame is current. It advances when
//! polled and enough time has passed, so the frame rate does not depend
//! on how often the main loop runs.

/// Frame cursor for a looping animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationPlayer {
    frame_count: usize,
    frame_index: usize,
    last_frame_at: u32,
    interval_ms: u32,
}

impl AnimationPlayer {
    /// Create a player over `frame_count` frames
    ///
    /// An empty animation is treated as a single still frame.
    pub fn new(frame_count: usize, interval_ms: u32) -> Self {
        Self {
            frame_count: frame_count.max(1),
            frame_index: 0,
            last_frame_at: 0,
            interval_ms,
        }
    }

    /// Index of the frame on screen
    pub fn current(&self) -> usize {
        self.frame_index
    }

    /// Number of frames in the loop
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Advance if the frame interval has passed
    ///
    /// Returns the new frame index, or `None` if it is not time yet. At
    /// most one frame is advanced per call; a late poll does not catch up.
    pub fn poll(&mut self, now: u32) -> Option<usize> {
        if now.wrapping_sub(self.last_frame_at) < self.interval_ms {
            return None;
        }
        self.frame_index = (self.frame_index + 1) % self.frame_count;
        self.last_frame_at = now;
        Some(self.frame_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FRAME_INTERVAL_MS;
    use proptest::prelude::*;

    #[test]
    fn test_waits_for_interval() {
        let mut player = AnimationPlayer::new(4, FRAME_INTERVAL_MS);
        assert_eq!(player.poll(46), Some(1));
        assert_eq!(player.poll(60), None);
        assert_eq!(player.poll(91), None);
        assert_eq!(player.poll(92), Some(2));
    }

    #[test]
    fn test_wraps_to_first_frame() {
        let mut player = AnimationPlayer::new(3, FRAME_INTERVAL_MS);
        let mut now = 0;
        let mut seen = [0usize; 6];
        for slot in seen.iter_mut() {
            now += FRAME_INTERVAL_MS;
            *slot = player.poll(now).unwrap();
        }
        assert_eq!(seen, [1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_late_poll_advances_once() {
        let mut player = AnimationPlayer::new(8, FRAME_INTERVAL_MS);
        assert_eq!(player.poll(10_000), Some(1));
        assert_eq!(player.poll(10_001), None);
    }

    #[test]
    fn test_empty_animation_is_still() {
        let mut player = AnimationPlayer::new(0, FRAME_INTERVAL_MS);
        assert_eq!(player.frame_count(), 1);
        assert_eq!(player.poll(100), Some(0));
        assert_eq!(player.current(), 0);
    }

    proptest! {
        #[test]
        fn prop_never_faster_than_interval(steps in proptest::collection::vec(1u32..30, 1..400)) {
            let mut player = AnimationPlayer::new(5, FRAME_INTERVAL_MS);
            let mut now = 0u32;
            let mut last_advance: Option<u32> = None;
            let mut expected = 0usize;

            for step in steps {
                now += step;
                if let Some(frame) = player.poll(now) {
                    if let Some(prev) = last_advance {
                        prop_assert!(now - prev >= FRAME_INTERVAL_MS);
                    }
                    expected = (expected + 1) % 5;
                    prop_assert_eq!(frame, expected);
                    last_advance = Some(now);
                }
            }
        }
    }
}
