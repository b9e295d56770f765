//! Bounded line assembly
//!
//! Bytes arrive one at a time from the serial port. The assembler
//! collects them until [`LINE_TERMINATOR`] and hands back a complete
//! line, never holding more than [`MAX_LINE_LEN`] bytes.

use heapless::{String, Vec};

/// Line terminator byte
pub const LINE_TERMINATOR: u8 = b'\n';

/// Maximum accepted line length in bytes (terminator excluded)
pub const MAX_LINE_LEN: usize = 255;

/// A complete received line
pub type Line = String<MAX_LINE_LEN>;

/// Errors raised while assembling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded the buffer; it is dropped up to the next terminator
    Overflow,
    /// Line was not valid UTF-8
    InvalidUtf8,
}

/// State machine turning a byte stream into lines
#[derive(Debug, Clone, Default)]
pub struct LineAssembler<const N: usize = MAX_LINE_LEN> {
    buffer: Vec<u8, N>,
    /// Set after an overflow until the next terminator
    discarding: bool,
}

impl<const N: usize> LineAssembler<N> {
    /// Create an empty assembler
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            discarding: false,
        }
    }

    /// Number of bytes buffered for the current line
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a non-empty
    /// line, `Ok(None)` when more bytes are needed. An overflow is
    /// reported once; the rest of that line is swallowed silently.
    pub fn feed(&mut self, byte: u8) -> Result<Option<String<N>>, LineError> {
        if byte == LINE_TERMINATOR {
            if self.discarding {
                self.discarding = false;
                return Ok(None);
            }
            if self.buffer.is_empty() {
                return Ok(None);
            }
            let bytes = core::mem::take(&mut self.buffer);
            return String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| LineError::InvalidUtf8);
        }

        if self.discarding {
            return Ok(None);
        }

        if self.buffer.push(byte).is_err() {
            self.buffer.clear();
            self.discarding = true;
            return Err(LineError::Overflow);
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed bytes until the first complete line, returning it and the
    /// number of bytes consumed
    fn feed_bytes<const N: usize>(
        asm: &mut LineAssembler<N>,
        bytes: &[u8],
    ) -> (Result<Option<String<N>>, LineError>, usize) {
        for (i, &byte) in bytes.iter().enumerate() {
            match asm.feed(byte) {
                Ok(None) => {}
                other => return (other, i + 1),
            }
        }
        (Ok(None), bytes.len())
    }

    #[test]
    fn test_single_line() {
        let mut asm: LineAssembler = LineAssembler::new();
        let (line, used) = feed_bytes(&mut asm, b"12,0,40,50,14:05,Mon\n");
        assert_eq!(line.unwrap().unwrap().as_str(), "12,0,40,50,14:05,Mon");
        assert_eq!(used, 21);
        assert_eq!(asm.pending(), 0);
    }

    #[test]
    fn test_bytes_after_line_are_kept() {
        let mut asm: LineAssembler = LineAssembler::new();
        let data = b"first\nsec";
        let (line, used) = feed_bytes(&mut asm, data);
        assert_eq!(line.unwrap().unwrap().as_str(), "first");

        let (line, _) = feed_bytes(&mut asm, &data[used..]);
        assert_eq!(line, Ok(None));
        assert_eq!(asm.pending(), 3);
    }

    #[test]
    fn test_empty_lines_skipped() {
        let mut asm: LineAssembler = LineAssembler::new();
        assert_eq!(asm.feed(b'\n'), Ok(None));
        assert_eq!(asm.feed(b'\n'), Ok(None));
    }

    #[test]
    fn test_max_length_line_accepted() {
        let mut asm: LineAssembler<8> = LineAssembler::new();
        let (line, _) = feed_bytes(&mut asm, b"abcdefgh\n");
        assert_eq!(line.unwrap().unwrap().as_str(), "abcdefgh");
    }

    #[test]
    fn test_overflow_reported_once_then_recovers() {
        let mut asm: LineAssembler<8> = LineAssembler::new();
        let (result, used) = feed_bytes(&mut asm, b"abcdefghijklmnop\nok\n");
        assert_eq!(result, Err(LineError::Overflow));
        assert_eq!(used, 9);

        // Rest of the long line is swallowed, the next one comes through
        let (result, _) = feed_bytes(&mut asm, &b"abcdefghijklmnop\nok\n"[used..]);
        assert_eq!(result.unwrap().unwrap().as_str(), "ok");
    }

    #[test]
    fn test_default_bound_is_255() {
        let mut asm: LineAssembler = LineAssembler::new();
        for _ in 0..MAX_LINE_LEN {
            assert_eq!(asm.feed(b'x'), Ok(None));
        }
        assert_eq!(asm.feed(b'x'), Err(LineError::Overflow));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut asm: LineAssembler = LineAssembler::new();
        let (result, _) = feed_bytes(&mut asm, &[0xFF, 0xFE, b'\n']);
        assert_eq!(result, Err(LineError::InvalidUtf8));

        let (result, _) = feed_bytes(&mut asm, b"fine\n");
        assert_eq!(result.unwrap().unwrap().as_str(), "fine");
    }
}
