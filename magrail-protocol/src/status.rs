//! Operator-facing status lines
//!
//! Each [`Status`] renders to one line of text without its terminator;
//! the writer on the serial side appends `\r\n`.

use core::fmt;

use crate::command::Direction;

/// Something worth telling the operator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// `DEMO` accepted
    RunningDemo,
    /// Demo countdown tick, counting down to zero
    Countdown { remaining: u8, first: bool },
    /// Single magnet set by command (1-based)
    MagnetSet { index: u8, on: bool },
    /// Every magnet set by command
    AllMagnetsSet(bool),
    /// Direction changed by command
    DirectionSet(Direction),
    /// Linear move started, in mm
    MovingLinear(f32),
    /// Angular move started, in degrees
    MovingAngular(f32),
    /// Manual jog started by a button
    Jogging { direction: Direction, mm: f32 },
    /// Manual toggle of the whole bank
    Toggling(bool),
    /// Controller asked to drive a magnet that does not exist
    PinOutOfRange { index: u8, magnet_count: u8 },
}

fn on_off(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "OFF"
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Status::RunningDemo => f.write_str("Running Demo"),
            Status::Countdown { remaining, first } => {
                if first {
                    f.write_str("Running demo in")?;
                }
                write!(f, "...{}", remaining)
            }
            Status::MagnetSet { index, on } => {
                write!(f, "Setting magnet #{} to {}", index, on_off(on))
            }
            Status::AllMagnetsSet(on) => write!(f, "Setting all magnets to {}", on_off(on)),
            Status::DirectionSet(Direction::Forward) => {
                f.write_str("Motor direction set to \"FORWARD\"")
            }
            Status::DirectionSet(Direction::Reverse) => {
                f.write_str("Motor direction set to \"REVERSE\"")
            }
            Status::MovingLinear(mm) => write!(f, "Moving carriage {:.2}mm", mm),
            Status::MovingAngular(deg) => write!(f, "Spinning driveshaft {:.2}deg", deg),
            Status::Jogging { direction, mm } => {
                let way = match direction {
                    Direction::Forward => "forward",
                    Direction::Reverse => "backward",
                };
                write!(f, "Manually moving {} by {:.2}mm", way, mm)
            }
            Status::Toggling(on) => write!(f, "Toggling all electromagnets \"{}\"", on_off(on)),
            Status::PinOutOfRange {
                index,
                magnet_count,
            } => write!(
                f,
                "setMagnet() pin specifier must be between 1->{}. Received \"{}\"",
                magnet_count, index
            ),
        }
    }
}
