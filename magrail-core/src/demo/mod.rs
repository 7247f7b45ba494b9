//! Demo choreography
//!
//! The demo cycles each cage into the irradiation field and back out.
//! It is built as a list of [`DemoStep`]s and replayed by the actuator
//! controller.

pub mod sequence;

pub use sequence::{demo_sequence, DemoSequence, DemoStep, MAX_DEMO_STEPS};
