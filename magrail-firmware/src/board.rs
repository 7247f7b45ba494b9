//! Board constants
//!
//! Pin map (SKR Pico style wiring):
//!
//! | Function            | GPIO   |
//! |---------------------|--------|
//! | UART0 TX / RX       | 0 / 1  |
//! | Magnets #1..#6      | 2..=7  |
//! | Stepper DIR         | 10     |
//! | Stepper STEP        | 11     |
//! | Stepper ENABLE      | 12     |
//! | Reverse jog button  | 13     |
//! | Forward jog button  | 14     |
//! | Magnet toggle button| 15     |
//!
//! The pins themselves are claimed in `main`, since embassy hands them
//! out as distinct peripheral types.

/// Magnets on the rail
pub const MAGNET_COUNT: usize = 6;

/// Magnet coils are energized by a high output
pub const MAGNETS_INVERTED: bool = false;

/// Buttons pull their input high when pressed
pub const BUTTONS_INVERTED: bool = false;

/// Size of each UART ring buffer
pub const UART_BUF_SIZE: usize = 256;
