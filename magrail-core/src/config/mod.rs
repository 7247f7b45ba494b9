//! Machine configuration
//!
//! Board-agnostic settings read from `machine.toml` at boot. Pin
//! assignments are board constants and do not appear here.

pub mod machine;
pub mod parse;

pub use machine::*;
pub use parse::{parse_config, ParseError};
