//! Stepper motor drivers

pub mod pulse;

pub use pulse::{PulseStepper, PulseTiming};
