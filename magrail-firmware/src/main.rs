//! Magrail - Irradiation Rig Firmware
//!
//! Main firmware binary for RP2040-based rig controllers. Drives the
//! carriage stepper and the electromagnet bank from three front-panel
//! buttons or a line-based command protocol on UART0.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use magrail_core::actuator::ActuatorController;
use magrail_core::input::Buttons;
use magrail_core::motion::MotorGeometry;
use magrail_core::scheduler::MainLoop;
use magrail_drivers::magnet::GpioMagnetBank;
use magrail_drivers::stepper::{PulseStepper, PulseTiming};
use magrail_hal_rp2040::{
    Clock, EmbassyClock, GpioInput, GpioOutput, SerialRx, SerialTx, UartWriter,
};

use crate::board::{BUTTONS_INVERTED, MAGNETS_INVERTED, UART_BUF_SIZE};
use crate::config::load_config;

mod board;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Magrail firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    info!(
        "Motor: {} mm/s, {} steps/rev, {} mm/rev",
        config.motor.speed_mm_per_s, config.motor.steps_per_rev, config.motor.mm_per_rev
    );
    info!(
        "Buttons: debounce {} ms, jog {} mm",
        config.buttons.debounce_ms, config.buttons.jog_mm
    );

    // Command port
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config.serial.baud_rate;

    let tx_buf = TX_BUF.init([0u8; UART_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; UART_BUF_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized at {} baud", config.serial.baud_rate);

    // Magnet coils, #1 on GPIO2 through #6 on GPIO7
    let magnets = GpioMagnetBank::new(
        [
            GpioOutput::new(Output::new(p.PIN_2, Level::Low)),
            GpioOutput::new(Output::new(p.PIN_3, Level::Low)),
            GpioOutput::new(Output::new(p.PIN_4, Level::Low)),
            GpioOutput::new(Output::new(p.PIN_5, Level::Low)),
            GpioOutput::new(Output::new(p.PIN_6, Level::Low)),
            GpioOutput::new(Output::new(p.PIN_7, Level::Low)),
        ],
        MAGNETS_INVERTED,
    );

    // Stepper driver (STEP=GPIO11, DIR=GPIO10, ENABLE=GPIO12)
    let geometry = MotorGeometry::from(&config.motor);
    let stepper = PulseStepper::new(
        GpioOutput::new(Output::new(p.PIN_11, Level::Low)),
        GpioOutput::new(Output::new(p.PIN_10, Level::Low)),
        GpioOutput::new(Output::new(p.PIN_12, Level::Low)),
        Delay,
        PulseTiming::from(&config.motor),
        config.motor.enable_inverted,
    );

    info!(
        "Stepper initialized: {} ns half period",
        geometry.half_period_ns()
    );

    // Front panel buttons (reverse=GPIO13, forward=GPIO14, toggle=GPIO15)
    let clock = EmbassyClock;
    let buttons = Buttons::new(
        GpioInput::new(Input::new(p.PIN_13, Pull::Down)),
        GpioInput::new(Input::new(p.PIN_14, Pull::Down)),
        GpioInput::new(Input::new(p.PIN_15, Pull::Down)),
        BUTTONS_INVERTED,
        config.buttons.debounce_ms,
        clock.now_ms(),
    );

    let console = UartWriter::new(SerialTx::new(tx));
    let actuator =
        ActuatorController::new(magnets, stepper, Delay, console, geometry, config.demo);
    let rig = MainLoop::new(
        actuator,
        buttons,
        clock,
        SerialRx::new(rx),
        config.buttons.jog_mm,
    );

    spawner.spawn(tasks::control_task(rig)).unwrap();

    info!("All tasks spawned");
}
