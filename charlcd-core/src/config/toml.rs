//! Minimal TOML parser for the controller configuration
//!
//! Handles only the subset `lcd.toml` uses and needs no allocator:
//! - `[section]` headers (`controller`, `timing`, `script`)
//! - `key = value` pairs (integer or string)
//! - Comments (`# ...`), including trailing ones
//!
//! Keys that are absent keep their default value.

use super::types::{ConfigError, ControllerMode, LcdConfig};

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Controller,
    Timing,
    Script,
}

/// Parse and validate configuration text
pub fn parse_config(input: &str) -> Result<LcdConfig, ConfigError> {
    let mut config = LcdConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    config.validate()?;
    Ok(config)
}

/// Parse a header line like "[timing]"
fn parse_section_header(line: &str) -> Result<Section, ConfigError> {
    let name = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ConfigError::InvalidSection)?
        .trim();

    match name {
        "controller" => Ok(Section::Controller),
        "timing" => Ok(Section::Timing),
        "script" => Ok(Section::Script),
        _ => Err(ConfigError::InvalidSection),
    }
}

/// Split "key = value", dropping a trailing comment
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    let value = match value.find('#') {
        // Only strip when the # is outside a quoted string
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Strip surrounding quotes
fn parse_string(value: &str) -> Result<&str, ConfigError> {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(ConfigError::InvalidValue)
}

/// Parse an integer, allowing `_` digit separators
fn parse_u32(value: &str) -> Result<u32, ConfigError> {
    let mut result: u32 = 0;
    let mut digits = 0;

    for c in value.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(10).ok_or(ConfigError::InvalidValue)?;
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(ConfigError::InvalidValue)?;
        digits += 1;
    }

    if digits == 0 {
        return Err(ConfigError::InvalidValue);
    }
    Ok(result)
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut LcdConfig,
) -> Result<(), ConfigError> {
    match (section, key) {
        (Section::Controller, "mode") => {
            config.mode = parse_string(value)?.parse::<ControllerMode>()?;
        }
        (Section::Controller, "tick_us") => config.tick_us = parse_u32(value)?,

        (Section::Timing, "setup_cycles") => config.timing.setup_cycles = parse_u32(value)?,
        (Section::Timing, "enable_cycles") => config.timing.enable_cycles = parse_u32(value)?,
        (Section::Timing, "hold_cycles") => config.timing.hold_cycles = parse_u32(value)?,
        (Section::Timing, "complete_cycles") => {
            config.timing.complete_cycles = parse_u32(value)?
        }

        (Section::Script, "wait_cycles") => config.script.wait_cycles = parse_u32(value)?,

        _ => return Err(ConfigError::UnknownKey),
    }
    Ok(())
}
