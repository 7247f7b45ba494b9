//! UART serial communication abstractions
//!
//! The command channel is a plain byte stream: the main loop drains
//! whatever has arrived without blocking, and status text goes out with
//! blocking writes.

use core::fmt;

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Check whether at least one byte can be read without blocking
    fn bytes_available(&mut self) -> bool;

    /// Read data from the UART
    ///
    /// Blocks until at least one byte is available or an error occurs.
    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Read a single byte from the UART
    ///
    /// `None` when the read returned no data.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let mut buf = [0u8; 1];
        match self.read_blocking(&mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }
}

/// Text adapter over a [`UartTx`]
///
/// Lets `write!`/`writeln!` target the serial port. Transmit errors are
/// reported as [`fmt::Error`].
pub struct UartWriter<T> {
    tx: T,
}

impl<T: UartTx> UartWriter<T> {
    /// Wrap a transmitter
    pub fn new(tx: T) -> Self {
        Self { tx }
    }
}

impl<T: UartTx> fmt::Write for UartWriter<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.tx.write_blocking(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    struct MockTx {
        data: [u8; 32],
        len: usize,
        fail: bool,
    }

    impl UartTx for MockTx {
        type Error = ();

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.data[self.len..self.len + data.len()].copy_from_slice(data);
            self.len += data.len();
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    struct MockRx {
        data: &'static [u8],
        pos: usize,
        fail: bool,
    }

    impl UartRx for MockRx {
        type Error = ();

        fn bytes_available(&mut self) -> bool {
            self.pos < self.data.len()
        }

        fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, ()> {
            if self.fail {
                return Err(());
            }
            let n = buf.len().min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn test_writer_formats_into_uart() {
        let mut writer = UartWriter::new(MockTx {
            data: [0; 32],
            len: 0,
            fail: false,
        });

        write!(writer, "MAG {}", 3).unwrap();
        assert_eq!(&writer.tx.data[..writer.tx.len], b"MAG 3");
    }

    #[test]
    fn test_writer_maps_errors() {
        let mut writer = UartWriter::new(MockTx {
            data: [0; 32],
            len: 0,
            fail: true,
        });

        assert!(writer.write_str("x").is_err());
    }

    #[test]
    fn test_read_byte_drains_in_order() {
        let mut rx = MockRx {
            data: b"OK",
            pos: 0,
            fail: false,
        };

        assert!(rx.bytes_available());
        assert_eq!(rx.read_byte(), Ok(Some(b'O')));
        assert_eq!(rx.read_byte(), Ok(Some(b'K')));
        assert!(!rx.bytes_available());
    }

    #[test]
    fn test_read_byte_empty_read_is_none() {
        let mut rx = MockRx {
            data: b"",
            pos: 0,
            fail: false,
        };

        assert_eq!(rx.read_byte(), Ok(None));

        rx.fail = true;
        assert_eq!(rx.read_byte(), Err(()));
    }
}
