//! GPIO pin abstractions
//!
//! Digital input and output pins for magnets, the step/dir lines and
//! the manual buttons.

/// Push-pull output driving a coil, a driver input or an LED
///
/// Writes cannot fail; a chip HAL whose writes can fail must handle the
/// error itself.
pub trait OutputPin {
    /// Drive the line to logic 1
    fn set_high(&mut self);

    /// Drive the line to logic 0
    fn set_low(&mut self);

    /// Drive the line to `high`
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Last level written
    fn is_set_high(&self) -> bool;

    /// Inverse of [`is_set_high`](Self::is_set_high)
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Reads are instantaneous samples; any filtering happens above this layer.
pub trait InputPin {
    /// Sample the line; true at logic 1
    fn is_high(&self) -> bool;

    /// Sample the line; true at logic 0
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
