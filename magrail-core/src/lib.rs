//! Board-agnostic control logic for the irradiation rig
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (magnet bank, stepper)
//! - Debounced button inputs
//! - Actuator control and the demo choreography
//! - Step geometry and timing
//! - The cooperative main loop
//! - Machine configuration and its TOML subset parser
//!
//! Status text for the operator is written through [`core::fmt::Write`].
//! Disabling the `status` feature compiles every status write away.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod actuator;
pub mod config;
pub mod demo;
pub mod input;
pub mod motion;
pub mod scheduler;
pub mod traits;

#[cfg(test)]
mod mock;
