//! Screen renderers
//!
//! Each renderer clears the framebuffer and draws one complete screen.
//! They hold no state between calls: what is drawn depends only on the
//! arguments.

use core::fmt::Write;

use heapless::String;
use statline_core::pomodoro::PomodoroView;
use statline_core::{Render, Scheduler};
use statline_protocol::{LineFormat, Snapshot};

use crate::animation::Animation;
use crate::backend::{bitmap_len, DisplayBackend, DisplayError, TextSize};

/// Longest formatted text line
pub const TEXT_LEN: usize = 48;

/// Boot banner text
pub const WELCOME_TEXT: &str = "Welcome!";

/// Horizontal step of the scrolling banner
pub const WELCOME_STEP: u16 = 12;

/// Top of the Pomodoro progress bar
const BAR_TOP: u16 = 30;

/// Height of the Pomodoro progress bar
const BAR_HEIGHT: u16 = 10;

type Text = String<TEXT_LEN>;

fn text(args: core::fmt::Arguments<'_>) -> Result<Text, DisplayError> {
    let mut out = Text::new();
    out.write_fmt(args).map_err(|_| DisplayError::BufferOverflow)?;
    Ok(out)
}

fn row(index: u16) -> i32 {
    (index * TextSize::Normal.line_height()) as i32
}

/// Draw the stats screen
///
/// The classic layout is five labelled lines starting with the CPU
/// temperature; the deck layout drops the temperature and shows the
/// time and day on their own lines.
pub fn render_stats<D: DisplayBackend>(
    display: &mut D,
    snapshot: &Snapshot,
    format: LineFormat,
) -> Result<(), DisplayError> {
    display.clear()?;

    let mut line = 0;
    if format == LineFormat::Classic {
        let celsius = snapshot.cpu_temperature().unwrap_or("");
        let temp = text(format_args!("CPU Temp: {} C", celsius))?;
        display.draw_text(0, row(line), &temp, TextSize::Normal)?;
        line += 1;
    }

    for (label, value) in [
        ("CPU", snapshot.cpu_usage()),
        ("RAM", snapshot.ram_usage()),
        ("Disk", snapshot.disk_usage()),
    ] {
        let usage = text(format_args!("{} Usage: {} %", label, value))?;
        display.draw_text(0, row(line), &usage, TextSize::Normal)?;
        line += 1;
    }

    match format {
        LineFormat::Classic => {
            let time = text(format_args!("Time: {}", snapshot.time_of_day()))?;
            display.draw_text(0, row(line), &time, TextSize::Normal)?;
        }
        LineFormat::Deck => {
            // Gap between usage and clock
            let top = row(line) + 4;
            display.draw_text(0, top, snapshot.time_of_day(), TextSize::Normal)?;
            if let Some(day) = snapshot.day_label() {
                let pitch = TextSize::Normal.line_height() as i32;
                display.draw_text(0, top + pitch, day, TextSize::Normal)?;
            }
        }
    }

    Ok(())
}

/// Draw the Pomodoro screen: title, `M:SS` countdown and progress bar
pub fn render_pomodoro<D: DisplayBackend>(
    display: &mut D,
    view: &PomodoroView,
) -> Result<(), DisplayError> {
    let (width, _) = display.pixel_dimensions();

    display.clear()?;
    display.draw_text(0, row(0), "Pomodoro Timer", TextSize::Normal)?;

    let time = text(format_args!("Time: {}:{:02}", view.minutes, view.seconds))?;
    display.draw_text(0, row(1), &time, TextSize::Normal)?;

    display.draw_rect(0, BAR_TOP, width, BAR_HEIGHT)?;
    let fill = view.bar_width(width);
    if fill > 0 {
        display.fill_rect(0, BAR_TOP, fill, BAR_HEIGHT)?;
    }

    Ok(())
}

/// Draw one animation frame centred on the panel
pub fn render_animation<D: DisplayBackend>(
    display: &mut D,
    animation: &Animation,
    frame: usize,
) -> Result<(), DisplayError> {
    display.clear()?;

    let Some(data) = animation.frame(frame) else {
        return Ok(());
    };
    if data.len() != bitmap_len(animation.width, animation.height) {
        return Err(DisplayError::InvalidBitmap);
    }

    let (width, height) = display.pixel_dimensions();
    let x = width.saturating_sub(animation.width) / 2;
    let y = height.saturating_sub(animation.height) / 2;
    display.draw_bitmap(x, y, animation.width, animation.height, data)
}

/// Draw the boot banner with its left edge at `x`
pub fn render_welcome<D: DisplayBackend>(display: &mut D, x: i32) -> Result<(), DisplayError> {
    let (_, height) = display.pixel_dimensions();
    let y = (height / 2) as i32 - 8;

    display.clear()?;
    display.draw_text(x, y, WELCOME_TEXT, TextSize::Large)
}

/// Final, centred position of the boot banner
pub fn welcome_centre<D: DisplayBackend>(display: &D) -> i32 {
    let (width, _) = display.pixel_dimensions();
    let text_width = TextSize::Large.text_width(WELCOME_TEXT);
    (width.saturating_sub(text_width) / 2) as i32
}

/// Left edges of the scrolling banner frames
pub fn welcome_positions<D: DisplayBackend>(display: &D) -> impl Iterator<Item = i32> {
    let (width, _) = display.pixel_dimensions();
    (0..width).step_by(WELCOME_STEP as usize).map(i32::from)
}

/// Draw whatever the scheduler asked for
pub fn render<D: DisplayBackend>(
    display: &mut D,
    render: Render,
    scheduler: &Scheduler,
    animation: &Animation,
) -> Result<(), DisplayError> {
    match render {
        Render::Stats => render_stats(
            display,
            scheduler.snapshot(),
            scheduler.profile().line_format,
        ),
        Render::Pomodoro(view) => render_pomodoro(display, &view),
        Render::Animation(frame) => render_animation(display, animation, frame),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statline_core::config::POMODORO_DURATION_MS;
    use statline_core::pomodoro::PomodoroSession;
    use statline_core::{Input, Profile};
    use statline_protocol::parse;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Text(i32, i32, std::string::String, TextSize),
        Rect(u16, u16, u16, u16),
        Fill(u16, u16, u16, u16),
        Bitmap(u16, u16, u16, u16, usize),
    }

    // Mock backend recording every call
    #[derive(Default)]
    struct MockDisplay {
        ops: Vec<Op>,
    }

    impl MockDisplay {
        fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(_, _, text, _) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl DisplayBackend for MockDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.ops.push(Op::Clear);
            Ok(())
        }

        fn draw_text(
            &mut self,
            x: i32,
            y: i32,
            text: &str,
            size: TextSize,
        ) -> Result<(), DisplayError> {
            self.ops.push(Op::Text(x, y, text.into(), size));
            Ok(())
        }

        fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16) -> Result<(), DisplayError> {
            self.ops.push(Op::Rect(x, y, w, h));
            Ok(())
        }

        fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16) -> Result<(), DisplayError> {
            self.ops.push(Op::Fill(x, y, w, h));
            Ok(())
        }

        fn draw_bitmap(
            &mut self,
            x: u16,
            y: u16,
            w: u16,
            h: u16,
            data: &[u8],
        ) -> Result<(), DisplayError> {
            self.ops.push(Op::Bitmap(x, y, w, h, data.len()));
            Ok(())
        }

        fn pixel_dimensions(&self) -> (u16, u16) {
            (128, 64)
        }
    }

    static FRAME_A: [u8; 32] = [0xAA; 32];
    static FRAME_B: [u8; 32] = [0x55; 32];
    static SPINNER: Animation = Animation {
        width: 16,
        height: 16,
        frames: &[&FRAME_A, &FRAME_B],
    };

    #[test]
    fn test_classic_stats_layout() {
        let snapshot = parse("42,x,8192,67,30,12:30,55", LineFormat::Classic).unwrap();
        let mut display = MockDisplay::default();
        render_stats(&mut display, &snapshot, LineFormat::Classic).unwrap();

        assert_eq!(display.ops[0], Op::Clear);
        assert_eq!(
            display.texts(),
            vec![
                "CPU Temp: 55 C",
                "CPU Usage: 42 %",
                "RAM Usage: 67 %",
                "Disk Usage: 30 %",
                "Time: 12:30",
            ]
        );
        assert_eq!(
            display.ops[5],
            Op::Text(0, 40, "Time: 12:30".into(), TextSize::Normal)
        );
    }

    #[test]
    fn test_deck_stats_layout() {
        let snapshot = parse("42,1024,67,30,2024-05-01 12:30,Wednesday", LineFormat::Deck).unwrap();
        let mut display = MockDisplay::default();
        render_stats(&mut display, &snapshot, LineFormat::Deck).unwrap();

        assert_eq!(
            display.texts(),
            vec![
                "CPU Usage: 42 %",
                "RAM Usage: 67 %",
                "Disk Usage: 30 %",
                "2024-05-01 12:30",
                "Wednesday",
            ]
        );
        assert_eq!(
            display.ops[4],
            Op::Text(0, 34, "2024-05-01 12:30".into(), TextSize::Normal)
        );
    }

    #[test]
    fn test_initial_snapshot_renders() {
        let mut display = MockDisplay::default();
        render_stats(&mut display, &Snapshot::initial(), LineFormat::Deck).unwrap();
        assert_eq!(display.texts()[0], "CPU Usage: 0 %");
        assert_eq!(display.texts()[3], "");
    }

    #[test]
    fn test_pomodoro_start_has_empty_bar() {
        let view = PomodoroSession::start(0, POMODORO_DURATION_MS).view(0);
        let mut display = MockDisplay::default();
        render_pomodoro(&mut display, &view).unwrap();

        assert_eq!(display.texts(), vec!["Pomodoro Timer", "Time: 25:00"]);
        assert!(display.ops.contains(&Op::Rect(0, 30, 128, 10)));
        assert!(!display.ops.iter().any(|op| matches!(op, Op::Fill(..))));
    }

    #[test]
    fn test_pomodoro_bar_tracks_progress() {
        let session = PomodoroSession::start(0, POMODORO_DURATION_MS);
        let mut display = MockDisplay::default();
        render_pomodoro(&mut display, &session.view(POMODORO_DURATION_MS / 2 + 5_000)).unwrap();

        assert_eq!(display.texts()[1], "Time: 12:25");
        assert!(display.ops.contains(&Op::Fill(0, 30, 64, 10)));

        let mut done = MockDisplay::default();
        render_pomodoro(&mut done, &session.view(u32::MAX / 2)).unwrap();
        assert_eq!(done.texts()[1], "Time: 0:00");
        assert!(done.ops.contains(&Op::Fill(0, 30, 128, 10)));
    }

    #[test]
    fn test_animation_frame_is_centred() {
        let mut display = MockDisplay::default();
        render_animation(&mut display, &SPINNER, 3).unwrap();
        assert_eq!(display.ops, vec![Op::Clear, Op::Bitmap(56, 24, 16, 16, 32)]);
    }

    #[test]
    fn test_malformed_animation_is_rejected() {
        static SHORT: [u8; 4] = [0; 4];
        static FRAMES: [&[u8]; 1] = [&SHORT];
        let broken = Animation {
            width: 16,
            height: 16,
            frames: &FRAMES,
        };
        let mut display = MockDisplay::default();
        assert_eq!(
            render_animation(&mut display, &broken, 0),
            Err(DisplayError::InvalidBitmap)
        );
    }

    #[test]
    fn test_welcome_banner() {
        let mut display = MockDisplay::default();
        let positions: Vec<i32> = welcome_positions(&display).collect();
        assert_eq!(positions.first(), Some(&0));
        assert_eq!(positions.last(), Some(&120));
        assert_eq!(positions.len(), 11);

        let centre = welcome_centre(&display);
        assert_eq!(centre, 24);

        render_welcome(&mut display, centre).unwrap();
        assert_eq!(
            display.ops,
            vec![
                Op::Clear,
                Op::Text(24, 24, WELCOME_TEXT.into(), TextSize::Large)
            ]
        );
    }

    #[test]
    fn test_dispatch_follows_scheduler() {
        let mut scheduler = Scheduler::new(Profile::deck(), SPINNER.frame_count(), 0);
        let step = scheduler.step(0, Input::button(false).with_line("1,2,3,4,5,6"));
        let mut display = MockDisplay::default();
        render(&mut display, step.render.unwrap(), &scheduler, &SPINNER).unwrap();
        assert_eq!(display.texts()[0], "CPU Usage: 1 %");

        let step = scheduler.step(5_000, Input::button(false));
        let mut display = MockDisplay::default();
        render(&mut display, step.render.unwrap(), &scheduler, &SPINNER).unwrap();
        assert!(matches!(display.ops[1], Op::Bitmap(56, 24, 16, 16, 32)));
    }
}
