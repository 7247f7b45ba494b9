//! Button and serial polling
//!
//! Each cycle handles at most one button action, in priority order
//! reverse jog, forward jog, magnet toggle, then drains the serial port.
//! A jog keeps stepping for as long as its button stays held.

use core::fmt;

use embedded_hal::delay::DelayNs;
use magrail_hal::{Clock, InputPin, UartRx};
use magrail_protocol::{Command, LineBuffer, Status};

use crate::actuator::ActuatorController;
use crate::input::Buttons;
use crate::traits::{Direction, MagnetBank, StepperDriver};

/// Button action taken during a cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    /// Manual jog in a direction
    Jog(Direction),
    /// Every magnet switched to the given state
    Toggle(bool),
}

/// Summary of one [`MainLoop::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Button action, if one fired
    pub action: Option<ButtonAction>,
    /// Steps added by holding a jog button
    pub hold_steps: u32,
    /// Lines parsed and executed
    pub commands: u16,
    /// Lines rejected by the parser
    pub rejected: u16,
    /// Serial reads that failed
    pub read_errors: u16,
}

impl CycleReport {
    /// Nothing happened this cycle
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// The rig's control loop
///
/// Owns every piece of mutable state: buttons, the partial serial line
/// and the actuator controller.
pub struct MainLoop<P, C, R, M, S, D, W, const N: usize> {
    buttons: Buttons<P>,
    clock: C,
    rx: R,
    line: LineBuffer,
    actuator: ActuatorController<M, S, D, W, N>,
    jog_mm: f32,
}

impl<P, C, R, M, S, D, W, const N: usize> MainLoop<P, C, R, M, S, D, W, N>
where
    P: InputPin,
    C: Clock,
    R: UartRx,
    M: MagnetBank,
    S: StepperDriver,
    D: DelayNs,
    W: fmt::Write,
{
    /// Create the loop
    ///
    /// `jog_mm` is the distance moved on a fresh jog press before the
    /// hold loop takes over.
    pub fn new(
        actuator: ActuatorController<M, S, D, W, N>,
        buttons: Buttons<P>,
        clock: C,
        rx: R,
        jog_mm: f32,
    ) -> Self {
        Self {
            buttons,
            clock,
            rx,
            line: LineBuffer::new(),
            actuator,
            jog_mm,
        }
    }

    /// Put the hardware in its boot state and print the help text
    pub fn startup(&mut self) {
        self.actuator.startup();
    }

    /// The actuator controller
    pub fn actuator(&self) -> &ActuatorController<M, S, D, W, N> {
        &self.actuator
    }

    /// Run one cycle
    pub fn poll(&mut self) -> CycleReport {
        let mut report = CycleReport::default();

        let now = self.clock.now_ms();
        self.buttons.update_all(now);

        if self.buttons.reverse.was_just_pressed() {
            report.action = Some(ButtonAction::Jog(Direction::Reverse));
            report.hold_steps = self.jog(Direction::Reverse);
        } else if self.buttons.forward.was_just_pressed() {
            report.action = Some(ButtonAction::Jog(Direction::Forward));
            report.hold_steps = self.jog(Direction::Forward);
        } else if self.buttons.toggle.was_just_pressed() {
            let on = !self.actuator.state().all_on;
            self.actuator.report(Status::Toggling(on));
            self.actuator.set_all_magnets(on);
            report.action = Some(ButtonAction::Toggle(on));
        }

        self.drain_serial(&mut report);
        report
    }

    /// Fixed jog, then one step per sample while the button is held
    ///
    /// Returns the number of hold steps.
    fn jog(&mut self, direction: Direction) -> u32 {
        self.actuator.report(Status::Jogging {
            direction,
            mm: self.jog_mm,
        });
        self.actuator.set_motor_direction(direction);
        self.actuator.move_linear(self.jog_mm);

        let mut held = 0u32;
        loop {
            let now = self.clock.now_ms();
            let button = self.buttons.jog(direction);
            button.update(now);
            if !button.is_pressed() {
                break;
            }

            self.actuator.step_once();
            held = held.saturating_add(1);
        }
        held
    }

    /// Feed every waiting byte through the line buffer
    fn drain_serial(&mut self, report: &mut CycleReport) {
        while self.rx.bytes_available() {
            let byte = match self.rx.read_byte() {
                Ok(Some(byte)) => byte,
                Ok(None) => break,
                Err(_) => {
                    report.read_errors = report.read_errors.saturating_add(1);
                    break;
                }
            };

            let Some(line) = self.line.feed(byte) else {
                continue;
            };

            match Command::parse_bytes(&line, self.actuator.magnet_count()) {
                Ok(Some(command)) => {
                    self.actuator.execute(command);
                    report.commands = report.commands.saturating_add(1);
                }
                Ok(None) => {}
                Err(error) => {
                    self.actuator.reject(error);
                    report.rejected = report.rejected.saturating_add(1);
                }
            }
        }
    }
}
