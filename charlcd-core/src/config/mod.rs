//! Configuration types
//!
//! Timing and mode configuration, plus a small allocation-free parser for
//! the `lcd.toml` file embedded in the firmware.

pub mod toml;
pub mod types;

pub use self::toml::parse_config;
pub use types::*;
