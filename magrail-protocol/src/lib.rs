//! Magrail serial command language
//!
//! This crate defines the text protocol spoken over the rig's serial port.
//! It is designed to be typed by hand in a terminal.
//!
//! # Protocol Overview
//!
//! Commands are newline-terminated ASCII lines. Carriage returns are
//! ignored, so both `\n` and `\r\n` endings work. Fields are separated
//! by `_` and matching is case-sensitive:
//! ```text
//! MAG_<n>_<ON|OFF>    n in 1..=N, or ALL
//! MOT_<FWD|REV>       set direction for subsequent moves
//! MOT_LIN_<mm>        move the carriage
//! MOT_ANG_<deg>       rotate the drive shaft
//! DEMO                run the demo choreography
//! HELP                print the language reference
//! ```
//!
//! Every command, accepted or not, is answered with one human-readable
//! status line (see [`status`]).

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod help;
pub mod line;
pub mod status;

pub use command::{Command, CommandError, Direction, MagnetTarget};
pub use help::write_help;
pub use line::{Line, LineBuffer, MAX_LINE_LEN};
pub use status::Status;
