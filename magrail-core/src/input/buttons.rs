//! The rig's three manual buttons

use magrail_hal::InputPin;

use super::debounce::DebouncedInput;
use crate::traits::Direction;

/// Manual controls, one field per physical button
pub struct Buttons<P> {
    /// Jog the carriage toward home
    pub reverse: DebouncedInput<P>,
    /// Jog the carriage away from home
    pub forward: DebouncedInput<P>,
    /// Flip every magnet
    pub toggle: DebouncedInput<P>,
}

impl<P: InputPin> Buttons<P> {
    /// Wrap the three button pins with a shared debounce window
    pub fn new(reverse: P, forward: P, toggle: P, inverted: bool, window_ms: u32, now_ms: u32) -> Self {
        Self {
            reverse: DebouncedInput::new(reverse, inverted, window_ms, now_ms),
            forward: DebouncedInput::new(forward, inverted, window_ms, now_ms),
            toggle: DebouncedInput::new(toggle, inverted, window_ms, now_ms),
        }
    }

    /// Sample every button
    pub fn update_all(&mut self, now_ms: u32) {
        self.reverse.update(now_ms);
        self.forward.update(now_ms);
        self.toggle.update(now_ms);
    }

    /// The jog button that drives the carriage in `direction`
    pub fn jog(&mut self, direction: Direction) -> &mut DebouncedInput<P> {
        match direction {
            Direction::Reverse => &mut self.reverse,
            Direction::Forward => &mut self.forward,
        }
    }
}
