//! Line framing for the serial command channel.
//!
//! Bytes are accumulated until a newline arrives:
//! - `\n` terminates the line and yields everything collected so far
//! - `\r` is discarded, so CRLF terminals work unchanged
//! - anything else is appended while there is room
//!
//! Overflow is silent: bytes past [`MAX_LINE_LEN`] are dropped and the line
//! is delivered truncated once its terminator shows up.

use heapless::Vec;

/// Maximum number of bytes kept per line
pub const MAX_LINE_LEN: usize = 127;

/// A completed line, without its terminator
pub type Line<const CAP: usize = MAX_LINE_LEN> = Vec<u8, CAP>;

/// Accumulates incoming bytes into lines
#[derive(Debug, Clone, Default)]
pub struct LineBuffer<const CAP: usize = MAX_LINE_LEN> {
    buffer: Vec<u8, CAP>,
}

impl<const CAP: usize> LineBuffer<CAP> {
    /// Create an empty line buffer
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Discard any partially received line
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Number of bytes waiting for a terminator
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte
    ///
    /// Returns `Some(line)` when `byte` is the newline that completes it,
    /// `None` otherwise.
    pub fn feed(&mut self, byte: u8) -> Option<Line<CAP>> {
        match byte {
            b'\n' => Some(core::mem::take(&mut self.buffer)),
            b'\r' => None,
            _ => {
                // Full buffer: drop the byte, the line gets truncated
                let _ = self.buffer.push(byte);
                None
            }
        }
    }
}
