//! Cooperative main loop
//!
//! One [`MainLoop::poll`] is one pass over the buttons and the serial
//! port. Nothing runs concurrently with it.

pub mod main_loop;

pub use main_loop::{ButtonAction, CycleReport, MainLoop};
