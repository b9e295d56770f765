//! Serial line intake
//!
//! Drains whatever bytes the UART already holds into a
//! [`LineAssembler`]. Stops at the first complete line so one loop
//! iteration handles at most one update.

use statline_hal::UartRx;
use statline_protocol::{Line, LineAssembler, LineError};

/// Errors surfaced while polling for a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError<E> {
    /// Malformed line framing
    Line(LineError),
    /// Receiver fault
    Uart(E),
}

/// Line reader over a non-blocking UART
pub struct SerialLines<R> {
    rx: R,
    assembler: LineAssembler,
}

impl<R: UartRx> SerialLines<R> {
    /// Wrap a receiver
    pub fn new(rx: R) -> Self {
        Self {
            rx,
            assembler: LineAssembler::new(),
        }
    }

    /// Get access to the underlying receiver
    pub fn rx(&self) -> &R {
        &self.rx
    }

    /// Collect available bytes
    ///
    /// Returns `Ok(Some(line))` once a line completes, `Ok(None)` when
    /// the receiver ran dry first. Never waits for more bytes.
    pub fn poll(&mut self) -> Result<Option<Line>, SerialError<R::Error>> {
        while self.rx.bytes_available() {
            let Some(byte) = self.rx.try_read_byte().map_err(SerialError::Uart)? else {
                break;
            };
            if let Some(line) = self.assembler.feed(byte).map_err(SerialError::Line)? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}
