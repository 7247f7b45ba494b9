//! RP2040-specific HAL for the rig firmware
//!
//! This crate implements the shared `magrail-hal` traits on top of
//! embassy-rp:
//!
//! - GPIO outputs and inputs
//! - Buffered UART halves for the command port
//! - Millisecond clock from the embassy time driver

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;
pub mod uart;

pub use gpio::{GpioInput, GpioOutput};
pub use time::EmbassyClock;
pub use uart::{SerialRx, SerialTx};

// Re-export shared traits from magrail-hal for convenience
pub use magrail_hal::{Clock, InputPin, OutputPin, UartRx, UartTx, UartWriter};
