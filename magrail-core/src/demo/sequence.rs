//! Demo step list

use heapless::Vec;

use crate::config::{DemoConfig, MAX_COUNTDOWN_S, MAX_MAGNETS};
use crate::traits::Direction;

/// Settle time around each magnet change, in ms
const SETTLE_MS: u32 = 100;

/// One second of countdown, in ms
const COUNTDOWN_TICK_MS: u32 = 1000;

/// Upper bound on the length of a demo
///
/// Countdown lines and waits, the opening and closing moves, and at most
/// nine steps per magnet.
pub const MAX_DEMO_STEPS: usize = 2 * MAX_COUNTDOWN_S as usize + 1 + 3 + 9 * MAX_MAGNETS + 4;

/// A single demo action
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DemoStep {
    /// Print a countdown line
    Countdown { remaining: u8, first: bool },
    /// Wait for a number of ms
    Wait(u32),
    /// Set one magnet (1-based)
    Magnet { index: u8, on: bool },
    /// Set every magnet
    AllMagnets(bool),
    /// Set the travel direction
    Direction(Direction),
    /// Move the carriage in mm
    Move(f32),
}

/// A fully expanded demo
pub type DemoSequence = Vec<DemoStep, MAX_DEMO_STEPS>;

/// Build the demo for a bank of `magnet_count` magnets
///
/// Each pass turns the previous magnet back on before releasing the
/// current one, so magnet `i - 1` and `i` are never both released.
/// Counts above [`MAX_MAGNETS`] are clamped.
pub fn demo_sequence(magnet_count: u8, config: &DemoConfig) -> DemoSequence {
    let mut steps = DemoSequence::new();
    let n = magnet_count.min(MAX_MAGNETS as u8);
    let countdown = config.countdown_s.min(MAX_COUNTDOWN_S);
    let travel = config.travel_mm;

    // Sized by MAX_DEMO_STEPS, so pushes cannot fail
    let mut push = |step| {
        let _ = steps.push(step);
    };

    for remaining in (0..=countdown).rev() {
        if remaining != countdown {
            push(DemoStep::Wait(COUNTDOWN_TICK_MS));
        }
        push(DemoStep::Countdown {
            remaining,
            first: remaining == countdown,
        });
    }

    push(DemoStep::AllMagnets(true));
    push(DemoStep::Direction(Direction::Forward));
    push(DemoStep::Move(travel));

    for index in 1..=n {
        if index > 1 {
            push(DemoStep::Magnet {
                index: index - 1,
                on: true,
            });
        }
        push(DemoStep::Magnet { index, on: false });
        push(DemoStep::Wait(SETTLE_MS));
        push(DemoStep::Direction(Direction::Reverse));
        push(DemoStep::Move(travel));
        push(DemoStep::Wait(config.dwell_ms));
        push(DemoStep::Direction(Direction::Forward));
        push(DemoStep::Move(travel));
        push(DemoStep::Wait(SETTLE_MS));
    }

    push(DemoStep::Magnet { index: n, on: true });
    push(DemoStep::Direction(Direction::Reverse));
    push(DemoStep::Move(travel));
    push(DemoStep::AllMagnets(false));

    steps
}
