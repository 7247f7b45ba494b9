//! Embedded machine configuration
//!
//! `machine.toml` is compiled into the image and checked by `build.rs`;
//! the runtime parse can still fail if the two ever disagree.

use defmt::*;

use magrail_core::config::{parse_config, MachineConfig};

/// Embedded default configuration (compiled into firmware)
/// Edit machine.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../machine.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load_config() -> MachineConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded embedded machine.toml");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded machine.toml: {:?}", e);
            warn!("Using default configuration");
            MachineConfig::default()
        }
    }
}
