//! UART helpers for STM32F0
//!
//! The receive task moves bytes from USART2 into a bounded pipe; the main
//! loop drains that pipe through [`PipeRx`] without ever waiting.

use core::convert::Infallible;

use embassy_stm32::usart::{self, Error as UsartError};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::pipe::Pipe;
use statline_hal::uart::{DataBits, Parity, StopBits};
use statline_hal::{UartConfig, UartRx};

/// Embassy USART config for a `UartConfig`
pub fn usart_config(config: &UartConfig) -> usart::Config {
    let mut out = usart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => usart::DataBits::DataBits7,
        DataBits::Eight => usart::DataBits::DataBits8,
        DataBits::Nine => usart::DataBits::DataBits9,
    };
    out.parity = match config.parity {
        Parity::None => usart::Parity::ParityNone,
        Parity::Even => usart::Parity::ParityEven,
        Parity::Odd => usart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => usart::StopBits::STOP1,
        StopBits::Two => usart::StopBits::STOP2,
    };
    out
}

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Framing error
    Framing,
    /// Noise error
    Noise,
    /// Overrun error
    Overrun,
    /// Parity error
    Parity,
    /// Other error
    Other,
}

impl From<UsartError> for UartBusError {
    fn from(e: UsartError) -> Self {
        match e {
            UsartError::Framing => UartBusError::Framing,
            UsartError::Noise => UartBusError::Noise,
            UsartError::Overrun => UartBusError::Overrun,
            UsartError::Parity => UartBusError::Parity,
            _ => UartBusError::Other,
        }
    }
}

/// Non-blocking byte source over a pipe filled by a receive task
pub struct PipeRx<'p, M: RawMutex, const N: usize> {
    pipe: &'p Pipe<M, N>,
}

impl<'p, M: RawMutex, const N: usize> PipeRx<'p, M, N> {
    pub fn new(pipe: &'p Pipe<M, N>) -> Self {
        Self { pipe }
    }
}

impl<M: RawMutex, const N: usize> UartRx for PipeRx<'_, M, N> {
    type Error = Infallible;

    fn bytes_available(&self) -> bool {
        !self.pipe.is_empty()
    }

    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let mut byte = [0u8; 1];
        match self.pipe.try_read(&mut byte) {
            Ok(1) => Ok(Some(byte[0])),
            _ => Ok(None),
        }
    }
}
