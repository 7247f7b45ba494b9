//! Last commanded actuator state

use crate::traits::Direction;

/// What the controller last drove onto its outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorState<const N: usize> {
    /// Per-magnet state, slot 0 is magnet 1
    pub magnets: [bool; N],
    /// Direction used by the next move
    pub direction: Direction,
    /// Aggregate flag flipped by the manual toggle
    ///
    /// Only whole-bank operations change it; single magnet commands
    /// leave it alone.
    pub all_on: bool,
    /// Stepper driver enabled
    pub enabled: bool,
}

impl<const N: usize> Default for ActuatorState<N> {
    fn default() -> Self {
        Self {
            magnets: [false; N],
            direction: Direction::Forward,
            all_on: false,
            enabled: false,
        }
    }
}

impl<const N: usize> ActuatorState<N> {
    /// Number of energized magnets
    pub fn energized(&self) -> usize {
        self.magnets.iter().filter(|&&on| on).count()
    }
}

#[cfg(feature = "defmt")]
impl<const N: usize> defmt::Format for ActuatorState<N> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "ActuatorState {{ magnets: {=[?]}, direction: {}, all_on: {}, enabled: {} }}",
            &self.magnets[..],
            self.direction,
            self.all_on,
            self.enabled
        )
    }
}
