//! Actuator controller
//!
//! Every actuation blocks until the hardware has finished: a move returns
//! after its last step pulse, and the demo returns once the carriage is
//! home and the bank is released.

use core::fmt;

use embedded_hal::delay::DelayNs;
#[cfg(feature = "status")]
use magrail_protocol::write_help;
use magrail_protocol::{Command, CommandError, MagnetTarget, Status};

use super::state::ActuatorState;
use super::ActuatorError;
use crate::config::{DemoConfig, MAX_MAGNETS};
use crate::demo::{demo_sequence, DemoStep};
use crate::motion::MotorGeometry;
use crate::traits::{Direction, MagnetBank, StepperDriver};

/// Drives the magnet bank and the carriage stepper
///
/// `N` is the number of magnets; commands address them as `1..=N`.
/// Status lines go to `out`, one `\r\n`-terminated line each.
pub struct ActuatorController<M, S, D, W, const N: usize> {
    magnets: M,
    stepper: S,
    delay: D,
    out: W,
    geometry: MotorGeometry,
    demo: DemoConfig,
    state: ActuatorState<N>,
}

impl<M, S, D, W, const N: usize> ActuatorController<M, S, D, W, N>
where
    M: MagnetBank,
    S: StepperDriver,
    D: DelayNs,
    W: fmt::Write,
{
    const BANK_SIZE_OK: () = assert!(N >= 1 && N <= MAX_MAGNETS, "magnet count out of range");

    /// Create a controller
    ///
    /// Outputs are left untouched until [`startup`](Self::startup).
    pub fn new(
        magnets: M,
        stepper: S,
        delay: D,
        out: W,
        geometry: MotorGeometry,
        demo: DemoConfig,
    ) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::BANK_SIZE_OK;

        Self {
            magnets,
            stepper,
            delay,
            out,
            geometry,
            demo,
            state: ActuatorState::default(),
        }
    }

    /// Number of magnets in the bank
    pub fn magnet_count(&self) -> u8 {
        N as u8
    }

    /// Last commanded state
    pub fn state(&self) -> &ActuatorState<N> {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn stepper(&self) -> &S {
        &self.stepper
    }

    #[cfg(test)]
    pub(crate) fn output(&mut self) -> &mut W {
        &mut self.out
    }

    /// Bring outputs to their boot state and print the help text
    ///
    /// Direction forward, all magnets released, driver enabled.
    pub fn startup(&mut self) {
        self.set_motor_direction(Direction::Forward);
        self.set_all_magnets(false);
        self.enable(true);
        self.show_help();
    }

    /// Set magnet `index` (1-based)
    ///
    /// Out-of-range indices are reported and change nothing.
    pub fn set_magnet(&mut self, index: u8, on: bool) -> Result<(), ActuatorError> {
        let slot = usize::from(index).wrapping_sub(1);
        if slot >= N {
            let magnet_count = self.magnet_count();
            self.report(Status::PinOutOfRange { index, magnet_count });
            return Err(ActuatorError::MagnetOutOfRange(index));
        }

        self.magnets.set(slot, on);
        self.state.magnets[slot] = on;
        Ok(())
    }

    /// Set every magnet and the aggregate flag
    pub fn set_all_magnets(&mut self, on: bool) {
        self.magnets.set_all(on);
        self.state.magnets = [on; N];
        self.state.all_on = on;
    }

    /// Set the direction for subsequent moves
    ///
    /// Returns after the driver's direction settle time.
    pub fn set_motor_direction(&mut self, direction: Direction) {
        self.stepper.set_direction(direction);
        self.state.direction = direction;
    }

    /// Enable or disable the stepper driver
    pub fn enable(&mut self, enabled: bool) {
        self.stepper.enable(enabled);
        self.state.enabled = enabled;
    }

    /// Emit a single step in the current direction
    pub fn step_once(&mut self) {
        self.stepper.step();
    }

    /// Move the carriage `mm` in the current direction
    ///
    /// Returns the number of steps issued.
    pub fn move_linear(&mut self, mm: f32) -> u32 {
        let steps = self.geometry.linear_steps(mm);
        self.stepper.step_n(steps);
        steps
    }

    /// Rotate the drive shaft `degrees` in the current direction
    ///
    /// Returns the number of steps issued.
    pub fn move_angular(&mut self, degrees: f32) -> u32 {
        let steps = self.geometry.angular_steps(degrees);
        self.stepper.step_n(steps);
        steps
    }

    /// Run the demo choreography to completion
    pub fn run_demo(&mut self) {
        let steps = demo_sequence(self.magnet_count(), &self.demo);

        for step in steps {
            match step {
                DemoStep::Countdown { remaining, first } => {
                    self.report(Status::Countdown { remaining, first })
                }
                DemoStep::Wait(ms) => self.delay.delay_ms(ms),
                DemoStep::Magnet { index, on } => {
                    // Reported by set_magnet when out of range
                    let _ = self.set_magnet(index, on);
                }
                DemoStep::AllMagnets(on) => self.set_all_magnets(on),
                DemoStep::Direction(direction) => self.set_motor_direction(direction),
                DemoStep::Move(mm) => {
                    self.move_linear(mm);
                }
            }
        }
    }

    /// Announce and carry out a parsed command
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::RunDemo => {
                self.report(Status::RunningDemo);
                self.run_demo();
            }
            Command::ShowHelp => self.show_help(),
            Command::SetMagnet {
                target: MagnetTarget::Single(index),
                on,
            } => {
                self.report(Status::MagnetSet { index, on });
                let _ = self.set_magnet(index, on);
            }
            Command::SetMagnet {
                target: MagnetTarget::All,
                on,
            } => {
                self.report(Status::AllMagnetsSet(on));
                self.set_all_magnets(on);
            }
            Command::SetMotorDirection(direction) => {
                self.report(Status::DirectionSet(direction));
                self.set_motor_direction(direction);
            }
            Command::MoveLinear(mm) => {
                self.report(Status::MovingLinear(mm));
                self.move_linear(mm);
            }
            Command::MoveAngular(degrees) => {
                self.report(Status::MovingAngular(degrees));
                self.move_angular(degrees);
            }
        }
    }

    /// Report a rejected command
    pub fn reject(&mut self, error: CommandError) {
        self.report(error);
    }

    /// Print the command language reference
    pub fn show_help(&mut self) {
        #[cfg(feature = "status")]
        {
            let magnet_count = self.magnet_count();
            let _ = write_help(&mut self.out, magnet_count);
        }
    }

    /// Write one status line
    ///
    /// Output errors are dropped; the status channel is best effort.
    pub fn report(&mut self, status: impl fmt::Display) {
        #[cfg(feature = "status")]
        {
            let _ = write!(self.out, "{}\r\n", status);
        }
        #[cfg(not(feature = "status"))]
        let _ = status;
    }
}
