//! Bitmap animation assets

use crate::backend::bitmap_len;

/// A looping 1bpp animation
///
/// Every frame has the same size and layout as [`DisplayBackend::draw_bitmap`]
/// expects.
///
/// [`DisplayBackend::draw_bitmap`]: crate::DisplayBackend::draw_bitmap
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    pub width: u16,
    pub height: u16,
    pub frames: &'static [&'static [u8]],
}

impl Animation {
    /// Number of frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame data, wrapping the index around the loop
    pub fn frame(&self, index: usize) -> Option<&'static [u8]> {
        if self.frames.is_empty() {
            return None;
        }
        Some(self.frames[index % self.frames.len()])
    }

    /// Check that every frame holds exactly one bitmap
    pub fn is_well_formed(&self) -> bool {
        let len = bitmap_len(self.width, self.height);
        self.frames.iter().all(|frame| frame.len() == len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static A: [u8; 2] = [0xFF, 0x00];
    static B: [u8; 2] = [0x00, 0xFF];
    static SHORT: [u8; 1] = [0x00];
    static PAIR: [&[u8]; 2] = [&A, &B];
    static MIXED: [&[u8]; 2] = [&A, &SHORT];

    #[test]
    fn test_frame_wraps() {
        let anim = Animation {
            width: 8,
            height: 2,
            frames: &PAIR,
        };
        assert_eq!(anim.frame_count(), 2);
        assert_eq!(anim.frame(0), Some(&A[..]));
        assert_eq!(anim.frame(3), Some(&B[..]));
        assert!(anim.is_well_formed());
    }

    #[test]
    fn test_empty_animation_has_no_frames() {
        let anim = Animation {
            width: 8,
            height: 2,
            frames: &[],
        };
        assert_eq!(anim.frame(0), None);
    }

    #[test]
    fn test_short_frame_is_malformed() {
        let anim = Animation {
            width: 8,
            height: 2,
            frames: &MIXED,
        };
        assert!(!anim.is_well_formed());
    }
}
