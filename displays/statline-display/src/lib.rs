//! Display backend trait and screen renderer for Statline
//!
//! This crate provides:
//! - `DisplayBackend` trait over a pixel framebuffer
//! - Stateless renderers for the stats, Pomodoro, animation and boot screens
//! - The `Animation` asset type
//! - `PageBuffer`, a change-tracking framebuffer for paged monochrome panels
//!
//! # Architecture
//!
//! The firmware's SH1106 driver draws into a [`PageBuffer`] and implements
//! `DisplayBackend` on top of it. The main loop asks the scheduler what to
//! draw, calls [`render`] and then flushes the driver, which sends only the
//! pages that changed. Nothing in here talks to hardware, so every screen can be
//! checked on the host against a recording backend.

#![cfg_attr(not(test), no_std)]

pub mod animation;
pub mod backend;
pub mod framebuffer;
pub mod screen;

// Re-export key types
pub use animation::Animation;
pub use backend::{bitmap_len, DisplayBackend, DisplayError, TextSize};
pub use framebuffer::PageBuffer;
pub use screen::{
    render, render_animation, render_pomodoro, render_stats, render_welcome, welcome_centre,
    welcome_positions, WELCOME_TEXT,
};
