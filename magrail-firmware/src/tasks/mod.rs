//! Embassy tasks
//!
//! The whole rig runs in a single task that owns the control loop.

pub mod control;

pub use control::control_task;
