//! Motion math
//!
//! Converts carriage distances and shaft angles into step counts, and
//! the configured linear speed into a step period.

pub mod geometry;

pub use geometry::MotorGeometry;
