//! Configuration type definitions
//!
//! Defaults match the rig as built: a 10mm lead screw, 1600 pulses per
//! revolution and a 55mm/s carriage.

/// Largest supported magnet bank
pub const MAX_MAGNETS: usize = 16;

/// Longest supported demo countdown in seconds
pub const MAX_COUNTDOWN_S: u8 = 9;

/// Stepper drive settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorConfig {
    /// Carriage speed in mm/s
    pub speed_mm_per_s: f32,
    /// Step pulses per motor revolution
    pub steps_per_rev: u32,
    /// Carriage travel per revolution in mm
    pub mm_per_rev: f32,
    /// Wait after a direction change before stepping, in µs
    pub dir_settle_us: u32,
    /// Driver enable line is active-low
    pub enable_inverted: bool,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            speed_mm_per_s: 55.0,
            steps_per_rev: 1600,
            mm_per_rev: 10.0,
            dir_settle_us: 30,
            enable_inverted: false,
        }
    }
}

/// Manual button settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Debounce window in ms (0 disables filtering)
    pub debounce_ms: u32,
    /// Distance moved on a fresh jog press in mm
    pub jog_mm: f32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 0,
            jog_mm: 2.0,
        }
    }
}

/// Demo choreography settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DemoConfig {
    /// Carriage travel into and out of the field in mm
    pub travel_mm: f32,
    /// Time each cage spends in the field in ms
    pub dwell_ms: u32,
    /// Countdown before the demo starts, in seconds
    pub countdown_s: u8,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            travel_mm: 200.0,
            dwell_ms: 1000,
            countdown_s: 3,
        }
    }
}

/// Serial port settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    /// Baud rate of the command port
    pub baud_rate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self { baud_rate: 9600 }
    }
}

/// Complete machine configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MachineConfig {
    pub motor: MotorConfig,
    pub buttons: ButtonConfig,
    pub demo: DemoConfig,
    pub serial: SerialConfig,
}

impl MachineConfig {
    /// Create a configuration with every setting at its default
    pub fn new() -> Self {
        Self::default()
    }
}
