//! Built-in animation: a ring of dots with one bright dot running round
//!
//! Frames are rendered at compile time into 1bpp bitmaps.

use statline_display::Animation;

const SIZE: usize = 32;
const BYTES_PER_ROW: usize = SIZE / 8;
const FRAME_BYTES: usize = BYTES_PER_ROW * SIZE;
const DOTS: usize = 8;
const CENTRE: i32 = (SIZE / 2) as i32;

/// Dot centres relative to the middle of the frame
const DOT_OFFSETS: [(i32, i32); DOTS] = [
    (0, -12),
    (8, -8),
    (12, 0),
    (8, 8),
    (0, 12),
    (-8, 8),
    (-12, 0),
    (-8, -8),
];

const fn dot_radius(dot: usize, active: usize) -> i32 {
    if dot == active {
        3
    } else if (dot + 1) % DOTS == active {
        2
    } else {
        1
    }
}

const fn spinner_frame(active: usize) -> [u8; FRAME_BYTES] {
    let mut out = [0u8; FRAME_BYTES];
    let mut y = 0;
    while y < SIZE {
        let mut x = 0;
        while x < SIZE {
            let mut dot = 0;
            while dot < DOTS {
                let r = dot_radius(dot, active);
                let dx = x as i32 - (CENTRE + DOT_OFFSETS[dot].0);
                let dy = y as i32 - (CENTRE + DOT_OFFSETS[dot].1);
                if dx * dx + dy * dy <= r * r {
                    out[y * BYTES_PER_ROW + x / 8] |= 0x80 >> (x % 8);
                }
                dot += 1;
            }
            x += 1;
        }
        y += 1;
    }
    out
}

static FRAMES: [[u8; FRAME_BYTES]; DOTS] = [
    spinner_frame(0),
    spinner_frame(1),
    spinner_frame(2),
    spinner_frame(3),
    spinner_frame(4),
    spinner_frame(5),
    spinner_frame(6),
    spinner_frame(7),
];

/// Idle-screen animation
pub static SPINNER: Animation = Animation {
    width: SIZE as u16,
    height: SIZE as u16,
    frames: &[
        &FRAMES[0], &FRAMES[1], &FRAMES[2], &FRAMES[3], &FRAMES[4], &FRAMES[5], &FRAMES[6],
        &FRAMES[7],
    ],
};
