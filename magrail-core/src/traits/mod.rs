//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod magnet;
pub mod stepper;

pub use magnet::MagnetBank;
pub use stepper::{Direction, StepperDriver};
