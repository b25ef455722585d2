//! Build script for charlcd-firmware
//!
//! - Puts memory.x on the linker search path
//! - Validates lcd.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys accepted per section, all integer-valued unless listed in
/// `STRING_KEYS`
const SECTIONS: &[(&str, &[&str])] = &[
    ("controller", &["mode", "tick_us"]),
    (
        "timing",
        &["setup_cycles", "enable_cycles", "hold_cycles", "complete_cycles"],
    ),
    ("script", &["wait_cycles"]),
];

const STRING_KEYS: &[&str] = &["mode"];

const MODES: &[&str] = &["host", "script"];

/// Shortest tick the firmware loop can keep up with
const MIN_TICK_US: i64 = 10;

fn main() {
    setup_linker();
    validate_config();
}

fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).expect("cannot create memory.x");
    f.write_all(memory_x).expect("cannot write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

fn validate_config() {
    println!("cargo:rerun-if-changed=lcd.toml");

    let config_path = Path::new("lcd.toml");
    if !config_path.exists() {
        fail("lcd.toml not found", &["The firmware embeds lcd.toml from the crate root."]);
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read lcd.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let msg = e.to_string();
            let lines: Vec<&str> = msg.lines().collect();
            fail("Invalid TOML syntax in lcd.toml", &lines)
        }
    };

    let errors = check_sections(&config);
    if !errors.is_empty() {
        fail("Invalid lcd.toml configuration", &errors);
    }

    println!("cargo:warning=lcd.toml validated successfully");
}

/// Collect every problem instead of stopping at the first
fn check_sections(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => return vec!["top level must be a table".to_string()],
    };

    for (name, section) in root {
        let Some(&(_, keys)) = SECTIONS.iter().find(|(s, _)| *s == name.as_str()) else {
            errors.push(format!("unknown section [{}]", name));
            continue;
        };

        let Some(table) = section.as_table() else {
            errors.push(format!("[{}] must be a table", name));
            continue;
        };

        for (key, value) in table {
            if !keys.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", name, key));
                continue;
            }

            if STRING_KEYS.contains(&key.as_str()) {
                match value.as_str() {
                    Some(mode) if MODES.contains(&mode) => {}
                    Some(_) => errors.push(format!(
                        "[{}] {} must be one of {:?}",
                        name, key, MODES
                    )),
                    None => errors.push(format!("[{}] {} must be a string", name, key)),
                }
                continue;
            }

            match value.as_integer() {
                Some(n) if key == "tick_us" && n < MIN_TICK_US => errors.push(format!(
                    "[{}] {} must be at least {}",
                    name, key, MIN_TICK_US
                )),
                Some(n) if (1..=i64::from(u32::MAX)).contains(&n) => {}
                Some(_) => errors.push(format!("[{}] {} must be 1-{}", name, key, u32::MAX)),
                None => errors.push(format!("[{}] {} must be an integer", name, key)),
            }
        }
    }

    errors
}

/// Abort the build with a boxed message
fn fail<S: AsRef<str>>(title: &str, lines: &[S]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            let truncated = if line.len() > 62 {
                format!("{}...", &line[..59])
            } else {
                line.to_string()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
