//! Stepper motor driver trait
//!
//! This trait abstracts over step/dir driver boards. Pulse timing belongs
//! to the implementation; callers only ask for whole steps.

pub use magrail_protocol::Direction;

/// Trait for step/dir stepper drivers
pub trait StepperDriver {
    /// Set the rotation direction
    ///
    /// Returns once the driver has latched the new direction, so the next
    /// [`step`](Self::step) moves the right way.
    fn set_direction(&mut self, dir: Direction);

    /// Get the current direction
    fn direction(&self) -> Direction;

    /// Emit one step pulse
    ///
    /// Blocks for the full step period: high phase, then low phase.
    fn step(&mut self);

    /// Enable or disable the motor driver
    ///
    /// When disabled, the motor is free to rotate and does not hold position.
    fn enable(&mut self, enabled: bool);

    /// Check if the motor is enabled
    fn is_enabled(&self) -> bool;

    /// Emit `count` step pulses in the current direction
    fn step_n(&mut self, count: u32) {
        for _ in 0..count {
            self.step();
        }
    }
}
