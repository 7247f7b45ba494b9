//! UART command port
//!
//! Adapts any blocking `embedded-io` reader or writer (in practice the
//! halves of an embassy-rp `BufferedUart`) to the `magrail-hal` UART
//! traits. Errors are reduced to their `embedded_io::ErrorKind`.

use embedded_io::{Error as _, ErrorKind, Read, ReadReady, Write};

/// Receive half of the command port
pub struct SerialRx<R> {
    rx: R,
}

impl<R> SerialRx<R> {
    /// Wrap a reader
    pub fn new(rx: R) -> Self {
        Self { rx }
    }
}

impl<R: Read + ReadReady> magrail_hal::UartRx for SerialRx<R> {
    type Error = ErrorKind;

    fn bytes_available(&mut self) -> bool {
        // A line error is surfaced by the next read
        self.rx.read_ready().unwrap_or(true)
    }

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.rx.read(buf).map_err(|e| e.kind())
    }
}

/// Transmit half of the command port
pub struct SerialTx<T> {
    tx: T,
}

impl<T> SerialTx<T> {
    /// Wrap a writer
    pub fn new(tx: T) -> Self {
        Self { tx }
    }
}

impl<T: Write> magrail_hal::UartTx for SerialTx<T> {
    type Error = ErrorKind;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.write_all(data).map_err(|e| e.kind())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.flush().map_err(|e| e.kind())
    }
}
