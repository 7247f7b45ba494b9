//! Electromagnet outputs

pub mod gpio;

pub use gpio::GpioMagnetBank;
