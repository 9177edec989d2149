//! Build script for battmeter-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates meter.toml at compile time
//! - Generates the `METER_CONFIG` constant from meter.toml

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Register width in bytes (must match battmeter-core)
const REGISTER_ALIGN: i64 = 4;

/// Upper bound for the refresh period
const MAX_REFRESH_MS: i64 = 60_000;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    setup_linker(&out_dir);
    let config = validate_config();
    generate_config(&out_dir, &config);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values extracted from meter.toml
struct MeterToml {
    voltage: u32,
    status: u32,
    display: u32,
    refresh_ms: u32,
}

/// Validate meter.toml configuration at compile time
fn validate_config() -> MeterToml {
    // Re-run if meter.toml changes
    println!("cargo:rerun-if-changed=meter.toml");

    let config_path = Path::new("meter.toml");

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read meter.toml                                ║\n\
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
                ║  ERROR: Invalid TOML syntax in meter.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let voltage = register_address(&config, "voltage", &mut errors);
    let status = register_address(&config, "status", &mut errors);
    let display = register_address(&config, "display", &mut errors);

    let addresses = [
        ("voltage", voltage),
        ("status", status),
        ("display", display),
    ];
    for (i, (name, address)) in addresses.iter().enumerate() {
        for (other, other_address) in &addresses[i + 1..] {
            if address.is_some() && address == other_address {
                errors.push(format!(
                    "[registers] '{}' and '{}' share an address",
                    name, other
                ));
            }
        }
    }

    let refresh_ms = match config.get("meter").and_then(|m| m.get("refresh_ms")) {
        Some(toml::Value::Integer(ms)) if (1..=MAX_REFRESH_MS).contains(ms) => Some(*ms as u32),
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[meter] refresh_ms must be 1-{}", MAX_REFRESH_MS));
            None
        }
        Some(_) => {
            errors.push("[meter] refresh_ms must be an integer".to_string());
            None
        }
        None => {
            errors.push("[meter] missing 'refresh_ms'".to_string());
            None
        }
    };

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid meter configuration                              ║\n\
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

    println!("cargo:warning=meter.toml validated successfully");

    MeterToml {
        voltage: voltage.unwrap_or_default(),
        status: status.unwrap_or_default(),
        display: display.unwrap_or_default(),
        refresh_ms: refresh_ms.unwrap_or_default(),
    }
}

/// Look up `[registers].<name>` and check it is an aligned 32-bit address
fn register_address(config: &toml::Value, name: &str, errors: &mut Vec<String>) -> Option<u32> {
    match config.get("registers").and_then(|r| r.get(name)) {
        Some(toml::Value::Integer(address)) => {
            if *address < 0 || *address > i64::from(u32::MAX) {
                errors.push(format!("[registers] '{}' is not a 32-bit address", name));
                None
            } else if address % REGISTER_ALIGN != 0 {
                errors.push(format!(
                    "[registers] '{}' must be {}-byte aligned",
                    name, REGISTER_ALIGN
                ));
                None
            } else {
                Some(*address as u32)
            }
        }
        Some(_) => {
            errors.push(format!("[registers] '{}' must be an integer", name));
            None
        }
        None => {
            errors.push(format!("[registers] missing '{}'", name));
            None
        }
    }
}

/// Write `meter_config.rs` for inclusion by src/config.rs
fn generate_config(out_dir: &Path, config: &MeterToml) {
    let source = format!(
        "/// Meter configuration generated from meter.toml\n\
         pub const METER_CONFIG: MeterConfig = MeterConfig {{\n\
         \x20   registers: RegisterMap {{\n\
         \x20       voltage: {:#010x},\n\
         \x20       status: {:#010x},\n\
         \x20       display: {:#010x},\n\
         \x20   }},\n\
         \x20   refresh_interval_ms: {},\n\
         }};\n",
        config.voltage, config.status, config.display, config.refresh_ms
    );

    fs::write(out_dir.join("meter_config.rs"), source).unwrap();
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
