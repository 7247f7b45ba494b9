//! Hardware stand-ins shared by the unit tests

use core::cell::Cell;

use embedded_hal::delay::DelayNs;
use magrail_hal::{Clock, InputPin, UartRx};

use crate::traits::{Direction, MagnetBank, StepperDriver};

/// Status output captured as text
pub type Sink = heapless::String<4096>;

pub struct MockMagnets<const N: usize> {
    pub on: [bool; N],
    pub writes: usize,
}

impl<const N: usize> MockMagnets<N> {
    pub fn new() -> Self {
        Self {
            on: [false; N],
            writes: 0,
        }
    }
}

impl<const N: usize> MagnetBank for MockMagnets<N> {
    fn count(&self) -> usize {
        N
    }

    fn set(&mut self, slot: usize, on: bool) {
        self.on[slot] = on;
        self.writes += 1;
    }

    fn is_on(&self, slot: usize) -> bool {
        self.on[slot]
    }
}

#[derive(Default)]
pub struct MockStepper {
    pub direction: Direction,
    pub enabled: bool,
    pub steps: u32,
    pub reverse_steps: u32,
}

impl StepperDriver for MockStepper {
    fn set_direction(&mut self, dir: Direction) {
        self.direction = dir;
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn step(&mut self) {
        self.steps += 1;
        if self.direction == Direction::Reverse {
            self.reverse_steps += 1;
        }
    }

    fn enable(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Adds up requested delays instead of waiting
#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl MockDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// Clock that advances a fixed amount every time it is read
pub struct MockClock {
    pub now: Cell<u32>,
    pub tick: u32,
}

impl MockClock {
    pub fn new(tick: u32) -> Self {
        Self {
            now: Cell::new(0),
            tick,
        }
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        let now = self.now.get();
        self.now.set(now.wrapping_add(self.tick));
        now
    }
}

/// Input pin that plays back a fixed list of samples
///
/// The last sample repeats once the script runs out.
pub struct ScriptedPin<'a> {
    samples: &'a [bool],
    next: Cell<usize>,
}

impl<'a> ScriptedPin<'a> {
    pub fn new(samples: &'a [bool]) -> Self {
        Self {
            samples,
            next: Cell::new(0),
        }
    }

    /// Samples taken so far
    pub fn reads(&self) -> usize {
        self.next.get()
    }
}

impl InputPin for ScriptedPin<'_> {
    fn is_high(&self) -> bool {
        let i = self.next.get();
        self.next.set(i + 1);
        self.samples
            .get(i)
            .or(self.samples.last())
            .copied()
            .unwrap_or(false)
    }
}

impl InputPin for &ScriptedPin<'_> {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSerialError;

/// Receive side that hands out a fixed byte string
pub struct MockSerial<'a> {
    pub data: &'a [u8],
    pub pos: usize,
    /// Fail the read at this offset once
    pub fail_at: Option<usize>,
    /// Return zero bytes at this offset once
    pub empty_at: Option<usize>,
}

impl<'a> MockSerial<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            fail_at: None,
            empty_at: None,
        }
    }
}

impl UartRx for MockSerial<'_> {
    type Error = MockSerialError;

    fn bytes_available(&mut self) -> bool {
        self.pos < self.data.len()
    }

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_at == Some(self.pos) {
            self.fail_at = None;
            return Err(MockSerialError);
        }
        if self.empty_at == Some(self.pos) {
            self.empty_at = None;
            return Ok(0);
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
