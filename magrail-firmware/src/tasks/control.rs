//! Control loop task
//!
//! Polls buttons and the command port forever. Every actuation blocks
//! this task for its full duration; nothing else runs on the executor.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embassy_time::Delay;

use magrail_core::scheduler::MainLoop;
use magrail_drivers::magnet::GpioMagnetBank;
use magrail_drivers::stepper::PulseStepper;
use magrail_hal_rp2040::{EmbassyClock, GpioInput, GpioOutput, SerialRx, SerialTx, UartWriter};

use crate::board::MAGNET_COUNT;

/// Magnet bank on the board's coil outputs
pub type Magnets = GpioMagnetBank<GpioOutput<'static>, MAGNET_COUNT>;

/// Step/dir driver timed with blocking embassy delays
pub type Stepper =
    PulseStepper<GpioOutput<'static>, GpioOutput<'static>, GpioOutput<'static>, Delay>;

/// Operator console on the UART transmit half
pub type Console = UartWriter<SerialTx<BufferedUartTx>>;

/// The fully wired control loop
pub type Rig = MainLoop<
    GpioInput<'static>,
    EmbassyClock,
    SerialRx<BufferedUartRx>,
    Magnets,
    Stepper,
    Delay,
    Console,
    MAGNET_COUNT,
>;

#[embassy_executor::task]
pub async fn control_task(mut rig: Rig) {
    info!("Control loop starting");
    rig.startup();
    info!(
        "Rig ready: {} magnets, direction {:?}",
        rig.actuator().magnet_count(),
        rig.actuator().state().direction
    );

    loop {
        let report = rig.poll();
        if report.is_idle() {
            continue;
        }

        if report.read_errors > 0 {
            warn!("Command port: {} read errors", report.read_errors);
        }
        debug!("Cycle: {:?}", report);
    }
}
