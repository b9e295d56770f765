//! Statline Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the board-agnostic
//! crates are written against. Chip-specific crates (currently STM32F0)
//! implement them over real peripherals, and host tests implement them
//! with plain structs.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (statline-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  statline-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ statline-hal-     │
//!           │   stm32f0         │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`buzzer::Buzzer`] - Alert output (level or timed tone)
//! - [`uart::UartRx`] - Non-blocking serial byte source

#![no_std]
#![deny(unsafe_code)]

pub mod buzzer;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use buzzer::Buzzer;
pub use gpio::{InputPin, OutputPin};
pub use uart::{UartConfig, UartRx};
