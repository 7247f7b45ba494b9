//! GPIO magnet bank
//!
//! Each electromagnet is switched by its own GPIO pin, usually through a
//! MOSFET or relay board.

use magrail_core::traits::MagnetBank;
use magrail_hal::OutputPin;

/// Bank of `N` magnets, one pin each
///
/// Pins can be active-high (default) or active-low.
pub struct GpioMagnetBank<P, const N: usize> {
    pins: [P; N],
    /// If true, magnet ON = pin LOW
    inverted: bool,
}

impl<P: OutputPin, const N: usize> GpioMagnetBank<P, N> {
    /// Create a bank and release every magnet
    ///
    /// `pins[0]` drives magnet 1.
    pub fn new(pins: [P; N], inverted: bool) -> Self {
        let mut bank = Self { pins, inverted };
        bank.set_all(false);
        bank
    }
}

impl<P: OutputPin, const N: usize> MagnetBank for GpioMagnetBank<P, N> {
    fn count(&self) -> usize {
        N
    }

    fn set(&mut self, slot: usize, on: bool) {
        let inverted = self.inverted;
        if let Some(pin) = self.pins.get_mut(slot) {
            pin.set_state(on != inverted);
        }
    }

    fn is_on(&self, slot: usize) -> bool {
        self.pins
            .get(slot)
            .is_some_and(|pin| pin.is_set_high() != self.inverted)
    }
}
