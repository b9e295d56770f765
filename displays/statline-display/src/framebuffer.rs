//! Page-organised framebuffer
//!
//! Monochrome panels such as the SH1106 take their RAM one page (8 pixel
//! rows) at a time. [`PageBuffer`] keeps the frame in that layout and
//! remembers which pages changed since the panel was last updated, so a
//! driver only has to send those.
//!
//! A page is marked dirty only when a byte in it actually changes, and
//! clearing marks only the pages that held lit pixels. A renderer that
//! clears and redraws a small bitmap therefore dirties just the pages
//! under the bitmap.

use core::convert::Infallible;

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::backend::{bitmap_len, DisplayBackend, DisplayError, TextSize};

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Every page
const ALL_PAGES: u8 = 0xFF;

/// 128x64 1bpp framebuffer with per-page change tracking
#[derive(Debug, Clone)]
pub struct PageBuffer {
    pages: [[u8; WIDTH]; PAGES],
    /// Bit per page changed since the last [`PageBuffer::mark_clean`]
    dirty: u8,
}

impl Default for PageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBuffer {
    /// Blank buffer with every page dirty, so the first update paints the
    /// whole panel
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
            dirty: ALL_PAGES,
        }
    }

    /// Bitmask of pages changed since they were last marked clean
    pub fn dirty_pages(&self) -> u8 {
        self.dirty
    }

    /// Whether `page` needs sending
    pub fn is_dirty(&self, page: usize) -> bool {
        page < PAGES && self.dirty & (1 << page) != 0
    }

    /// Force every page to be resent
    pub fn mark_all_dirty(&mut self) {
        self.dirty = ALL_PAGES;
    }

    /// Record that `page` now matches the panel
    pub fn mark_clean(&mut self, page: usize) {
        if page < PAGES {
            self.dirty &= !(1 << page);
        }
    }

    /// Column bytes of one page, bit 0 at the top row
    pub fn page(&self, page: usize) -> &[u8; WIDTH] {
        &self.pages[page]
    }

    fn set(&mut self, x: usize, y: usize, on: bool) {
        let page = y / 8;
        let mask = 1 << (y % 8);
        let byte = &mut self.pages[page][x];
        let old = *byte;

        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        if *byte != old {
            self.dirty |= 1 << page;
        }
    }
}

impl OriginDimensions for PageBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for PageBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x < 0 || coord.y < 0 || coord.x >= WIDTH as i32 || coord.y >= HEIGHT as i32 {
                continue;
            }
            self.set(coord.x as usize, coord.y as usize, color.is_on());
        }
        Ok(())
    }
}

fn font(size: TextSize) -> &'static MonoFont<'static> {
    match size {
        TextSize::Normal => &FONT_6X10,
        TextSize::Large => &FONT_10X20,
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> Result<(), DisplayError> {
    match result {
        Ok(_) => Ok(()),
        Err(never) => match never {},
    }
}

fn rectangle(x: u16, y: u16, width: u16, height: u16) -> Rectangle {
    Rectangle::new(
        Point::new(x.into(), y.into()),
        Size::new(width.into(), height.into()),
    )
}

impl DisplayBackend for PageBuffer {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for (index, page) in self.pages.iter_mut().enumerate() {
            if page.iter().any(|&byte| byte != 0) {
                page.fill(0);
                self.dirty |= 1 << index;
            }
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        size: TextSize,
    ) -> Result<(), DisplayError> {
        let style = MonoTextStyleBuilder::new()
            .font(font(size))
            .text_color(BinaryColor::On)
            .build();
        infallible(Text::with_baseline(text, Point::new(x, y), style, Baseline::Top).draw(self))
    }

    fn draw_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        let style = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        infallible(rectangle(x, y, width, height).into_styled(style).draw(self))
    }

    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        let style = PrimitiveStyle::with_fill(BinaryColor::On);
        infallible(rectangle(x, y, width, height).into_styled(style).draw(self))
    }

    fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        data: &[u8],
    ) -> Result<(), DisplayError> {
        if data.len() != bitmap_len(width, height) {
            return Err(DisplayError::InvalidBitmap);
        }
        let raw = ImageRaw::<BinaryColor>::new(data, width.into());
        infallible(Image::new(&raw, Point::new(x.into(), y.into())).draw(self))
    }

    fn pixel_dimensions(&self) -> (u16, u16) {
        (WIDTH as u16, HEIGHT as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Animation;
    use crate::screen::render_animation;

    static SOLID: [u8; 128] = [0xFF; 128];
    static HOLLOW: [u8; 128] = [0x81; 128];
    static FRAMES: [&[u8]; 2] = [&SOLID, &HOLLOW];
    static SQUARES: Animation = Animation {
        width: 32,
        height: 32,
        frames: &FRAMES,
    };

    fn clean(buffer: &mut PageBuffer) {
        for page in 0..PAGES {
            buffer.mark_clean(page);
        }
    }

    #[test]
    fn test_new_buffer_is_fully_dirty() {
        let buffer = PageBuffer::new();
        assert_eq!(buffer.dirty_pages(), 0xFF);
        assert!(buffer.is_dirty(7));
        assert!(!buffer.is_dirty(8));
    }

    #[test]
    fn test_clearing_blank_buffer_touches_nothing() {
        let mut buffer = PageBuffer::new();
        clean(&mut buffer);
        DisplayBackend::clear(&mut buffer).unwrap();
        assert_eq!(buffer.dirty_pages(), 0);
    }

    #[test]
    fn test_animation_frame_dirties_only_its_pages() {
        let mut buffer = PageBuffer::new();
        render_animation(&mut buffer, &SQUARES, 0).unwrap();
        clean(&mut buffer);

        // 32x32 centred at y = 16 covers pages 2..=5
        render_animation(&mut buffer, &SQUARES, 1).unwrap();
        assert_eq!(buffer.dirty_pages(), 0b0011_1100);
    }

    #[test]
    fn test_redrawing_lit_pixels_is_not_a_change() {
        let mut buffer = PageBuffer::new();
        buffer.fill_rect(0, 0, 8, 8).unwrap();
        clean(&mut buffer);

        buffer.fill_rect(0, 0, 8, 8).unwrap();
        assert_eq!(buffer.dirty_pages(), 0);
    }

    #[test]
    fn test_pixels_land_in_page_bits() {
        let mut buffer = PageBuffer::new();
        buffer.fill_rect(3, 9, 1, 1).unwrap();
        assert_eq!(buffer.page(1)[3], 0b0000_0010);
        assert_eq!(buffer.page(0)[3], 0);
    }

    #[test]
    fn test_off_panel_pixels_are_ignored() {
        let mut buffer = PageBuffer::new();
        clean(&mut buffer);
        buffer.draw_text(-200, 100, "x", TextSize::Normal).unwrap();
        assert_eq!(buffer.dirty_pages(), 0);
    }

    #[test]
    fn test_short_bitmap_is_rejected() {
        let mut buffer = PageBuffer::new();
        assert_eq!(
            buffer.draw_bitmap(0, 0, 8, 8, &[0; 7]),
            Err(DisplayError::InvalidBitmap)
        );
    }
}
