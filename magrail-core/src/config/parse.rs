//! Simple TOML parser for machine configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! `machine.toml`. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (integer, float, boolean)
//! - [section] headers
//! - Comments (# ...), including after a section header
//! - `_` digit separators in numbers
//!
//! Any other non-blank line is an error.
//!
//! Unknown keys are skipped so older firmware can read newer files;
//! unknown sections are rejected.

use super::machine::{MachineConfig, MAX_COUNTDOWN_S};
use crate::motion::MotorGeometry;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid section header
    InvalidSection,
    /// Invalid value type or out-of-range value
    InvalidValue,
    /// Key outside of any section
    MissingSection,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Motor,
    Buttons,
    Demo,
    Serial,
}

/// Parse TOML configuration into MachineConfig
///
/// Settings absent from the input keep their defaults.
pub fn parse_config(input: &str) -> Result<MachineConfig, ParseError> {
    let mut config = MachineConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line);

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    // Step pulses are timed in u32 nanoseconds
    if MotorGeometry::from(&config.motor)
        .checked_step_period_ns()
        .is_none()
    {
        return Err(ParseError::InvalidValue);
    }

    Ok(config)
}

/// Drop a trailing `# ...` comment and surrounding whitespace
///
/// The subset has no string values, so every `#` starts a comment.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(hash_pos) => line[..hash_pos].trim(),
        None => line.trim(),
    }
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "motor" => Ok(Section::Motor),
        "buttons" => Ok(Section::Buttons),
        "demo" => Ok(Section::Demo),
        "serial" => Ok(Section::Serial),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = match value.find('#') {
        Some(hash_pos) => value[..hash_pos].trim(),
        None => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Copy a number without its `_` digit separators
fn strip_separators(value: &str) -> Result<heapless::String<32>, ParseError> {
    let mut digits = heapless::String::new();
    for c in value.chars().filter(|&c| c != '_') {
        digits.push(c).map_err(|_| ParseError::InvalidValue)?;
    }
    Ok(digits)
}

/// Parse an integer value, allowing `_` digit separators
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    strip_separators(value)?
        .parse()
        .map_err(|_| ParseError::InvalidValue)
}

/// Parse a float value; integers and `_` separators are accepted too
fn parse_float(value: &str) -> Result<f32, ParseError> {
    strip_separators(value)?
        .parse()
        .map_err(|_| ParseError::InvalidValue)
}

/// Parse a strictly positive, finite float
fn parse_positive(value: &str) -> Result<f32, ParseError> {
    let v = parse_float(value)?;
    if v > 0.0 && v.is_finite() {
        Ok(v)
    } else {
        Err(ParseError::InvalidValue)
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Apply a parsed value to the appropriate config field
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut MachineConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => return Err(ParseError::MissingSection),
        Section::Motor => {
            let m = &mut config.motor;
            match key {
                "speed_mm_per_s" => m.speed_mm_per_s = parse_positive(value)?,
                "steps_per_rev" => {
                    m.steps_per_rev = parse_int(value)?;
                    if m.steps_per_rev == 0 {
                        return Err(ParseError::InvalidValue);
                    }
                }
                "mm_per_rev" => m.mm_per_rev = parse_positive(value)?,
                "dir_settle_us" => m.dir_settle_us = parse_int(value)?,
                "enable_inverted" => m.enable_inverted = parse_bool(value)?,
                _ => {} // Ignore unknown keys
            }
        }
        Section::Buttons => {
            let b = &mut config.buttons;
            match key {
                "debounce_ms" => b.debounce_ms = parse_int(value)?,
                "jog_mm" => b.jog_mm = parse_positive(value)?,
                _ => {}
            }
        }
        Section::Demo => {
            let d = &mut config.demo;
            match key {
                "travel_mm" => d.travel_mm = parse_positive(value)?,
                "dwell_ms" => d.dwell_ms = parse_int(value)?,
                "countdown_s" => {
                    d.countdown_s = parse_int(value)?;
                    if d.countdown_s > MAX_COUNTDOWN_S {
                        return Err(ParseError::InvalidValue);
                    }
                }
                _ => {}
            }
        }
        Section::Serial => {
            let s = &mut config.serial;
            match key {
                "baud_rate" => {
                    s.baud_rate = parse_int(value)?;
                    if s.baud_rate == 0 {
                        return Err(ParseError::InvalidValue);
                    }
                }
                _ => {}
            }
        }
    }

    Ok(())
}
