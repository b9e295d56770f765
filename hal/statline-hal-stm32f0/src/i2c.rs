//! I2C helpers for STM32F0
//!
//! The SH1106 panel sits on I2C1. The firmware drives embassy's async I2C
//! directly; this module provides its configuration and error mapping.

use embassy_stm32::i2c::{Config, Error as I2cError};
use embassy_stm32::time::Hertz;
use embassy_time::Duration;

/// I2C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// SCL frequency in Hz
    pub frequency: u32,
    /// Per-transfer timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 400_000, // 400 kHz (Fast mode)
            timeout_ms: 100,
        }
    }
}

impl I2cConfig {
    /// Embassy peripheral config
    pub fn to_embassy(&self) -> Config {
        let mut config = Config::default();
        config.frequency = Hertz(self.frequency);
        config.timeout = Duration::from_millis(self.timeout_ms);
        config
    }
}

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received (panel missing or wrong address)
    Nack,
    /// Timeout
    Timeout,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<I2cError> for I2cBusError {
    fn from(e: I2cError) -> Self {
        match e {
            I2cError::Bus => I2cBusError::Bus,
            I2cError::Arbitration => I2cBusError::ArbitrationLost,
            I2cError::Nack => I2cBusError::Nack,
            I2cError::Timeout => I2cBusError::Timeout,
            I2cError::Overrun => I2cBusError::Overrun,
            _ => I2cBusError::Other,
        }
    }
}
