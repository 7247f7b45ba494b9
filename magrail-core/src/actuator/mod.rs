//! Magnet and carriage actuation
//!
//! [`ActuatorController`] owns the magnet bank and the stepper, tracks
//! what it last commanded in [`ActuatorState`], and reports every
//! accepted command on the status channel.

pub mod controller;
pub mod state;

pub use controller::ActuatorController;
pub use state::ActuatorState;

/// Errors that can occur with actuator operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorError {
    /// Magnet index outside `1..=N`
    MagnetOutOfRange(u8),
}
