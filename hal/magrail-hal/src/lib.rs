//! Magrail Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the rig logic is
//! written against. Chip-specific HALs implement them, and host tests
//! implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (magrail-core, firmware)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  magrail-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ magrail-hal-  │       │  test mocks   │
//! │    rp2040     │       │   (host)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`uart::UartTx`], [`uart::UartRx`] - Byte-oriented serial channel
//! - [`time::Clock`] - Monotonic millisecond clock
//!
//! Busy-wait delays use `embedded_hal::delay::DelayNs` directly rather
//! than a trait of our own.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use time::Clock;
pub use uart::{UartRx, UartTx, UartWriter};
