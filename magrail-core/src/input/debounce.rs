//! Time-window debouncing

use magrail_hal::InputPin;

/// Debounce filter over a stream of raw samples
///
/// A raw change resets the settle timer; the filtered state follows the
/// raw value once it has held for at least the window. The previous
/// filtered state is recorded on every update, so each edge is visible
/// for exactly one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Settle window in ms
    window_ms: u32,
    /// Last raw sample
    last_reading: bool,
    /// Time of the last raw change
    last_change_ms: u32,
    /// Filtered state after the latest update
    current: bool,
    /// Filtered state after the update before
    previous: bool,
}

impl Debouncer {
    /// Create a filter settled on `initial`
    pub const fn new(window_ms: u32, initial: bool, now_ms: u32) -> Self {
        Self {
            window_ms,
            last_reading: initial,
            last_change_ms: now_ms,
            current: initial,
            previous: initial,
        }
    }

    /// Feed one raw sample taken at `now_ms`
    pub fn update(&mut self, reading: bool, now_ms: u32) {
        if reading != self.last_reading {
            self.last_change_ms = now_ms;
        }

        self.previous = self.current;
        if now_ms.wrapping_sub(self.last_change_ms) >= self.window_ms {
            self.current = reading;
        }

        self.last_reading = reading;
    }

    /// Filtered state
    pub fn is_pressed(&self) -> bool {
        self.current
    }

    /// Filtered state went inactive → active on the latest update
    pub fn was_just_pressed(&self) -> bool {
        self.current && !self.previous
    }

    /// Filtered state went active → inactive on the latest update
    pub fn was_just_released(&self) -> bool {
        !self.current && self.previous
    }
}

/// A button pin behind a [`Debouncer`]
///
/// Pressed means a high pin, or a low pin when `inverted`.
pub struct DebouncedInput<P> {
    pin: P,
    inverted: bool,
    filter: Debouncer,
}

impl<P: InputPin> DebouncedInput<P> {
    /// Wrap a pin, seeding the filter with its current level
    pub fn new(pin: P, inverted: bool, window_ms: u32, now_ms: u32) -> Self {
        let initial = pin.is_high() != inverted;
        Self {
            pin,
            inverted,
            filter: Debouncer::new(window_ms, initial, now_ms),
        }
    }

    /// Sample the pin and advance the filter
    pub fn update(&mut self, now_ms: u32) {
        let reading = self.pin.is_high() != self.inverted;
        self.filter.update(reading, now_ms);
    }

    /// Button is held, after filtering
    pub fn is_pressed(&self) -> bool {
        self.filter.is_pressed()
    }

    /// Button went down on the latest update
    pub fn was_just_pressed(&self) -> bool {
        self.filter.was_just_pressed()
    }

    /// Button came up on the latest update
    pub fn was_just_released(&self) -> bool {
        self.filter.was_just_released()
    }
}
