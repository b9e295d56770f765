//! STM32F0 adapters for the Statline status display
//!
//! This crate connects the `statline-hal` traits to embassy-stm32
//! peripherals on STM32F0 chips:
//!
//! - STM32F042K6 (Nucleo-32 board used by the display)
//!
//! # Features
//!
//! - `stm32f042k6` - Enable support for STM32F042K6
//! - `stm32f042f6` - Enable support for the TSSOP-20 variant
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! GPIO wrappers implement `InputPin`/`OutputPin`, the UART module maps
//! `UartConfig` onto the embassy config and reads received bytes out of a
//! pipe, and the buzzer module turns `Buzzer` calls into commands for an
//! async driver that owns the pin.

#![no_std]

pub mod buzzer;
pub mod gpio;
pub mod i2c;
pub mod uart;

pub use buzzer::{drive_buzzer, BuzzerCommand, SignalBuzzer};
pub use gpio::{Stm32Input, Stm32Output};
pub use i2c::{I2cBusError, I2cConfig};
pub use uart::{PipeRx, UartBusError};
