//! GPIO pins
//!
//! Thin wrappers that put embassy-rp pins behind the `magrail-hal` pin
//! traits.

use embassy_rp::gpio::{Input, Output};

/// Push-pull output pin
pub struct GpioOutput<'d> {
    pin: Output<'d>,
}

impl<'d> GpioOutput<'d> {
    /// Wrap a configured output
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl magrail_hal::OutputPin for GpioOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Input pin
pub struct GpioInput<'d> {
    pin: Input<'d>,
}

impl<'d> GpioInput<'d> {
    /// Wrap a configured input
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl magrail_hal::InputPin for GpioInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
