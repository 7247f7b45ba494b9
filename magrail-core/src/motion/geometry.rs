//! Drive train geometry
//!
//! The carriage is driven by a lead screw: one motor revolution is
//! `steps_per_rev` pulses and moves the carriage `mm_per_rev`.

use crate::config::MotorConfig;

const NANOS_PER_SEC: f32 = 1_000_000_000.0;
const DEGREES_PER_REV: f32 = 360.0;

/// Step geometry and speed of the carriage drive
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorGeometry {
    /// Linear speed in mm/s
    pub speed_mm_per_s: f32,
    /// Step pulses per motor revolution (microstepping included)
    pub steps_per_rev: u32,
    /// Carriage travel per motor revolution in mm
    pub mm_per_rev: f32,
}

impl Default for MotorGeometry {
    fn default() -> Self {
        Self::from(&MotorConfig::default())
    }
}

impl From<&MotorConfig> for MotorGeometry {
    fn from(config: &MotorConfig) -> Self {
        Self {
            speed_mm_per_s: config.speed_mm_per_s,
            steps_per_rev: config.steps_per_rev,
            mm_per_rev: config.mm_per_rev,
        }
    }
}

impl MotorGeometry {
    /// Carriage travel per step in mm
    pub fn mm_per_step(&self) -> f32 {
        self.mm_per_rev / self.steps_per_rev as f32
    }

    /// Shaft rotation per step in degrees
    pub fn degrees_per_step(&self) -> f32 {
        DEGREES_PER_REV / self.steps_per_rev as f32
    }

    /// Whole steps needed to travel `mm`, rounded down
    ///
    /// Non-positive distances give zero; huge ones saturate.
    pub fn linear_steps(&self, mm: f32) -> u32 {
        (mm * self.steps_per_rev as f32 / self.mm_per_rev) as u32
    }

    /// Whole steps needed to rotate `degrees`, rounded down
    pub fn angular_steps(&self, degrees: f32) -> u32 {
        (degrees * self.steps_per_rev as f32 / DEGREES_PER_REV) as u32
    }

    /// Full step period in nanoseconds at the configured speed
    ///
    /// Saturates for periods past `u32::MAX` ns (about 4.29 s); see
    /// [`checked_step_period_ns`](Self::checked_step_period_ns).
    pub fn step_period_ns(&self) -> u32 {
        (NANOS_PER_SEC / self.speed_mm_per_s * self.mm_per_step()) as u32
    }

    /// Full step period in nanoseconds, or `None` if it does not fit a `u32`
    pub fn checked_step_period_ns(&self) -> Option<u32> {
        let period = NANOS_PER_SEC / self.speed_mm_per_s * self.mm_per_step();
        if period.is_finite() && period < u32::MAX as f32 {
            Some(period as u32)
        } else {
            None
        }
    }

    /// Duration of each pulse phase (high, then low) in nanoseconds
    pub fn half_period_ns(&self) -> u32 {
        self.step_period_ns() / 2
    }
}
