//! Step/dir stepper driver
//!
//! Bit-banged pulse generation for external driver boards that take a
//! STEP, a DIR and an ENABLE line. Every call blocks for its full timing:
//! a step holds STEP high for half the step period and low for the other
//! half, and a direction change waits for the driver's setup time.

use embedded_hal::delay::DelayNs;
use magrail_core::config::MotorConfig;
use magrail_core::motion::MotorGeometry;
use magrail_core::traits::{Direction, StepperDriver};
use magrail_hal::OutputPin;

/// Pulse timing for a [`PulseStepper`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTiming {
    /// Duration of each of the high and low phases, in ns
    pub half_period_ns: u32,
    /// Wait after driving DIR, in µs
    pub dir_settle_us: u32,
}

impl PulseTiming {
    /// Timing for a drive running at the geometry's configured speed
    pub fn new(geometry: &MotorGeometry, dir_settle_us: u32) -> Self {
        Self {
            half_period_ns: geometry.half_period_ns(),
            dir_settle_us,
        }
    }
}

impl From<&MotorConfig> for PulseTiming {
    fn from(config: &MotorConfig) -> Self {
        Self::new(&MotorGeometry::from(config), config.dir_settle_us)
    }
}

/// Step/dir driver on three GPIO lines
///
/// Forward drives DIR low and reverse drives DIR high. ENABLE is
/// active-high unless `enable_inverted`.
pub struct PulseStepper<STEP, DIR, EN, D> {
    step_pin: STEP,
    dir_pin: DIR,
    enable_pin: EN,
    delay: D,
    timing: PulseTiming,
    enable_inverted: bool,
    direction: Direction,
    enabled: bool,
}

impl<STEP, DIR, EN, D> PulseStepper<STEP, DIR, EN, D>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    D: DelayNs,
{
    /// Create a new driver
    ///
    /// STEP starts low and the driver starts disabled. DIR is not driven
    /// until the first [`set_direction`](StepperDriver::set_direction).
    pub fn new(
        step_pin: STEP,
        dir_pin: DIR,
        enable_pin: EN,
        delay: D,
        timing: PulseTiming,
        enable_inverted: bool,
    ) -> Self {
        let mut stepper = Self {
            step_pin,
            dir_pin,
            enable_pin,
            delay,
            timing,
            enable_inverted,
            direction: Direction::Forward,
            enabled: false,
        };
        stepper.step_pin.set_low();
        stepper.enable(false);
        stepper
    }
}

impl<STEP, DIR, EN, D> StepperDriver for PulseStepper<STEP, DIR, EN, D>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    D: DelayNs,
{
    fn set_direction(&mut self, dir: Direction) {
        self.dir_pin.set_state(dir == Direction::Reverse);
        self.delay.delay_us(self.timing.dir_settle_us);
        self.direction = dir;
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn step(&mut self) {
        self.step_pin.set_high();
        self.delay.delay_ns(self.timing.half_period_ns);
        self.step_pin.set_low();
        self.delay.delay_ns(self.timing.half_period_ns);
    }

    fn enable(&mut self, enabled: bool) {
        self.enable_pin.set_state(enabled != self.enable_inverted);
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Step(bool),
        Dir(bool),
        Enable(bool),
        WaitNs(u32),
    }

    type Trace = Rc<RefCell<Vec<Event>>>;

    /// Mock GPIO pin that logs writes into a shared trace
    struct TracePin {
        trace: Trace,
        wrap: fn(bool) -> Event,
        high: bool,
    }

    impl OutputPin for TracePin {
        fn set_high(&mut self) {
            self.high = true;
            self.trace.borrow_mut().push((self.wrap)(true));
        }

        fn set_low(&mut self) {
            self.high = false;
            self.trace.borrow_mut().push((self.wrap)(false));
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct TraceDelay {
        trace: Trace,
    }

    impl DelayNs for TraceDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.trace.borrow_mut().push(Event::WaitNs(ns));
        }
    }

    const TIMING: PulseTiming = PulseTiming {
        half_period_ns: 56_818,
        dir_settle_us: 30,
    };

    fn stepper(
        enable_inverted: bool,
    ) -> (PulseStepper<TracePin, TracePin, TracePin, TraceDelay>, Trace) {
        let trace: Trace = Rc::new(RefCell::new(Vec::new()));
        let pin = |wrap: fn(bool) -> Event| TracePin {
            trace: trace.clone(),
            wrap,
            high: false,
        };
        let stepper = PulseStepper::new(
            pin(Event::Step),
            pin(Event::Dir),
            pin(Event::Enable),
            TraceDelay {
                trace: trace.clone(),
            },
            TIMING,
            enable_inverted,
        );
        trace.borrow_mut().clear();
        (stepper, trace)
    }

    #[test]
    fn test_step_pulse_shape() {
        let (mut s, trace) = stepper(false);

        s.step_n(2);

        assert_eq!(
            *trace.borrow(),
            [
                Event::Step(true),
                Event::WaitNs(56_818),
                Event::Step(false),
                Event::WaitNs(56_818),
                Event::Step(true),
                Event::WaitNs(56_818),
                Event::Step(false),
                Event::WaitNs(56_818),
            ]
        );
    }

    #[test]
    fn test_direction_levels_and_settle() {
        let (mut s, trace) = stepper(false);

        s.set_direction(Direction::Reverse);
        assert_eq!(s.direction(), Direction::Reverse);
        s.set_direction(Direction::Forward);
        assert_eq!(s.direction(), Direction::Forward);

        let trace = trace.borrow();
        assert_eq!(trace[0], Event::Dir(true));
        assert_eq!(trace.iter().filter(|e| **e == Event::Dir(false)).count(), 1);

        // The settle wait follows each DIR write before anything else
        let settle_ns: u32 = trace
            .iter()
            .filter_map(|e| match e {
                Event::WaitNs(ns) => Some(*ns),
                _ => None,
            })
            .sum();
        assert_eq!(settle_ns, 2 * 30_000);
        assert!(!trace.iter().any(|e| matches!(e, Event::Step(_))));
    }

    #[test]
    fn test_enable_polarity() {
        let (mut s, trace) = stepper(false);
        s.enable(true);
        assert!(s.is_enabled());
        assert_eq!(trace.borrow().last(), Some(&Event::Enable(true)));

        let (mut s, trace) = stepper(true);
        s.enable(true);
        assert!(s.is_enabled());
        assert_eq!(trace.borrow().last(), Some(&Event::Enable(false)));
    }

    #[test]
    fn test_starts_disabled_with_step_low() {
        let (s, _) = stepper(true);

        assert!(!s.is_enabled());
        assert!(!s.step_pin.is_set_high());
        // Active-low enable is held high while disabled
        assert!(s.enable_pin.is_set_high());
    }

    #[test]
    fn test_timing_from_config() {
        let timing = PulseTiming::from(&MotorConfig::default());

        assert_eq!(timing.dir_settle_us, 30);
        assert_eq!(timing.half_period_ns, MotorGeometry::default().half_period_ns());
    }
}
