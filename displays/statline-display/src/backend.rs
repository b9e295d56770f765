//! Display backend trait
//!
//! The renderer only needs a handful of drawing primitives. Coordinates
//! are in pixels from the top-left corner; anything outside the panel is
//! clipped by the backend.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Bitmap data does not match its declared size
    InvalidBitmap,
    /// Formatted text did not fit the line buffer
    BufferOverflow,
}

/// Text size
///
/// `Normal` fits five lines on a 64-pixel panel; `Large` is used for
/// the boot banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    Normal,
    Large,
}

impl TextSize {
    /// Advance per character in pixels
    pub const fn char_width(self) -> u16 {
        match self {
            TextSize::Normal => 6,
            TextSize::Large => 10,
        }
    }

    /// Line pitch in pixels
    pub const fn line_height(self) -> u16 {
        match self {
            TextSize::Normal => 10,
            TextSize::Large => 20,
        }
    }

    /// Width of `text` in pixels
    pub fn text_width(self, text: &str) -> u16 {
        (text.chars().count() as u16).saturating_mul(self.char_width())
    }
}

/// Display backend trait
///
/// Implemented over a framebuffer; nothing reaches the panel until the
/// driver flushes.
pub trait DisplayBackend {
    /// Clear the framebuffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, x: i32, y: i32, text: &str, size: TextSize)
        -> Result<(), DisplayError>;

    /// Draw a one-pixel rectangle outline
    fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError>;

    /// Fill a rectangle
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError>;

    /// Blit a 1bpp bitmap, rows MSB-first and padded to whole bytes
    fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        data: &[u8],
    ) -> Result<(), DisplayError>;

    /// Panel size as (width, height) in pixels
    fn pixel_dimensions(&self) -> (u16, u16);
}

/// Bytes needed for a 1bpp bitmap of the given size
pub const fn bitmap_len(width: u16, height: u16) -> usize {
    (width as usize).div_ceil(8) * height as usize
}
