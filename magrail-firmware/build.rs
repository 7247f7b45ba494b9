//! Build script for magrail-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates machine.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sections the firmware understands
const SECTIONS: &[&str] = &["motor", "buttons", "demo", "serial"];

/// Mirrors the firmware's countdown limit
const MAX_COUNTDOWN_S: i64 = 9;

/// Motor defaults used when a key is absent
const DEFAULT_SPEED_MM_PER_S: f64 = 55.0;
const DEFAULT_STEPS_PER_REV: f64 = 1600.0;
const DEFAULT_MM_PER_REV: f64 = 10.0;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate machine.toml configuration at compile time
fn validate_config() {
    // Re-run if machine.toml changes
    println!("cargo:rerun-if-changed=machine.toml");

    let config_path = Path::new("machine.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: machine.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds machine.toml at compile time.               ║\n\
            ║  Please create one in the magrail-firmware directory.            ║\n\
            ║  An empty file selects every default.                            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read machine.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in machine.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_motor(&config, &mut errors);
    validate_buttons(&config, &mut errors);
    validate_demo(&config, &mut errors);
    validate_serial(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in machine.toml                           ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=machine.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only known tables at the top level, no bare keys
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };

    for (name, value) in root {
        if !value.is_table() {
            errors.push(format!("Key '{}' must live inside a section", name));
        } else if !SECTIONS.contains(&name.as_str()) {
            errors.push(format!("Unknown section [{}]", name));
        }
    }
}

fn section<'a>(config: &'a toml::Value, name: &str) -> Option<&'a toml::value::Table> {
    config.get(name).and_then(|v| v.as_table())
}

/// Numeric value as f64, accepting integers and floats
fn number(value: &toml::Value) -> Option<f64> {
    match value {
        toml::Value::Integer(i) => Some(*i as f64),
        toml::Value::Float(f) => Some(*f),
        _ => None,
    }
}

fn require_positive(table: &toml::value::Table, prefix: &str, key: &str, errors: &mut Vec<String>) {
    if let Some(value) = table.get(key) {
        match number(value) {
            Some(n) if n > 0.0 => {}
            _ => errors.push(format!("{}.{} must be a number above zero", prefix, key)),
        }
    }
}

fn require_int_range(
    table: &toml::value::Table,
    prefix: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    if let Some(value) = table.get(key) {
        match value.as_integer() {
            Some(n) if (min..=max).contains(&n) => {}
            _ => errors.push(format!(
                "{}.{} must be an integer in {}..={}",
                prefix, key, min, max
            )),
        }
    }
}

fn validate_motor(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(motor) = section(config, "motor") else {
        return;
    };

    require_positive(motor, "motor", "speed_mm_per_s", errors);
    require_positive(motor, "motor", "mm_per_rev", errors);
    require_int_range(motor, "motor", "steps_per_rev", 1, u32::MAX as i64, errors);
    require_int_range(motor, "motor", "dir_settle_us", 0, u32::MAX as i64, errors);

    if let Some(value) = motor.get("enable_inverted") {
        if !value.is_bool() {
            errors.push("motor.enable_inverted must be true or false".to_string());
        }
    }

    // Step pulses are timed in u32 nanoseconds
    let get = |key: &str, default: f64| motor.get(key).and_then(number).unwrap_or(default);
    let speed = get("speed_mm_per_s", DEFAULT_SPEED_MM_PER_S);
    let steps = get("steps_per_rev", DEFAULT_STEPS_PER_REV);
    let pitch = get("mm_per_rev", DEFAULT_MM_PER_REV);
    if speed > 0.0 && steps > 0.0 {
        let period_ns = 1e9 / speed * (pitch / steps);
        if period_ns >= u32::MAX as f64 {
            errors.push("motor.speed_mm_per_s too slow: step period over 4.29s".to_string());
        }
    }
}

fn validate_buttons(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(buttons) = section(config, "buttons") else {
        return;
    };

    require_int_range(buttons, "buttons", "debounce_ms", 0, u32::MAX as i64, errors);
    require_positive(buttons, "buttons", "jog_mm", errors);
}

fn validate_demo(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(demo) = section(config, "demo") else {
        return;
    };

    require_positive(demo, "demo", "travel_mm", errors);
    require_int_range(demo, "demo", "dwell_ms", 0, u32::MAX as i64, errors);
    require_int_range(demo, "demo", "countdown_s", 0, MAX_COUNTDOWN_S, errors);
}

fn validate_serial(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(serial) = section(config, "serial") else {
        return;
    };

    require_int_range(serial, "serial", "baud_rate", 1, u32::MAX as i64, errors);
}
