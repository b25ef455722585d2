//! Configuration type definitions
//!
//! Cycle counts are in controller clock ticks. The defaults are far above
//! the HD44780 datasheet minimums; the display only latched reliably with
//! margins in the hundreds-of-microseconds range.

use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default SETUP duration (cycles)
pub const DEFAULT_SETUP_CYCLES: u32 = 16;

/// Default ENABLE pulse width (cycles)
pub const DEFAULT_ENABLE_CYCLES: u32 = 5000;

/// Default HOLD duration (cycles)
pub const DEFAULT_HOLD_CYCLES: u32 = 16;

/// Default recovery time while the display executes the instruction (cycles)
pub const DEFAULT_COMPLETE_CYCLES: u32 = 20000;

/// Default WAIT duration of the script player (cycles)
pub const DEFAULT_SCRIPT_WAIT_CYCLES: u32 = 20;

/// Default firmware tick period in microseconds
pub const DEFAULT_TICK_US: u32 = 10;

/// Shortest firmware tick period in microseconds
///
/// One tick drives up to ten GPIOs and logs; below this the ticker falls
/// permanently behind.
pub const MIN_TICK_US: u32 = 10;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A state duration of zero cycles
    ZeroDuration,
    /// Unknown controller mode string
    InvalidMode,
    /// Key not valid in its section
    UnknownKey,
    /// Value could not be parsed
    InvalidValue,
    /// Malformed or unknown section header
    InvalidSection,
    /// Tick period below [`MIN_TICK_US`]
    TickTooShort,
}

/// Timing of the peripheral's bus sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Data/RS stable before the enable strobe
    pub setup_cycles: u32,
    /// Enable strobe high time
    pub enable_cycles: u32,
    /// Data/RS stable after the enable strobe
    pub hold_cycles: u32,
    /// Wait for the display to finish executing
    pub complete_cycles: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            setup_cycles: DEFAULT_SETUP_CYCLES,
            enable_cycles: DEFAULT_ENABLE_CYCLES,
            hold_cycles: DEFAULT_HOLD_CYCLES,
            complete_cycles: DEFAULT_COMPLETE_CYCLES,
        }
    }
}

impl TimingConfig {
    /// Reject durations the sequencer can never leave
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            self.setup_cycles,
            self.enable_cycles,
            self.hold_cycles,
            self.complete_cycles,
        ];
        if durations.contains(&0) {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }

    /// Cycles the busy flag stays set for one accepted request
    ///
    /// The plain sum of the four thresholds: 25032 with the defaults.
    pub fn busy_cycles(&self) -> u64 {
        self.setup_cycles as u64
            + self.enable_cycles as u64
            + self.hold_cycles as u64
            + self.complete_cycles as u64
    }

    /// Cycle (relative to acceptance) on which the enable strobe rises
    pub fn enable_start(&self) -> u64 {
        self.setup_cycles as u64
    }

    /// First cycle (relative to acceptance) with the enable strobe low again
    pub fn enable_end(&self) -> u64 {
        self.setup_cycles as u64 + self.enable_cycles as u64
    }
}

/// Timing of the autonomous script player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScriptTiming {
    /// Cycles spent in WAIT after each strobe
    pub wait_cycles: u32,
}

impl Default for ScriptTiming {
    fn default() -> Self {
        Self {
            wait_cycles: DEFAULT_SCRIPT_WAIT_CYCLES,
        }
    }
}

impl ScriptTiming {
    /// Reject a zero WAIT duration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wait_cycles == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }
}

/// Which top level drives the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ControllerMode {
    /// Host writes requests through the register interface
    #[default]
    Host,
    /// Script player replays a fixed script, no host
    Script,
}

impl FromStr for ControllerMode {
    type Err = ConfigError;

    /// Parse from a config string ("host" or "script")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "host" => Ok(ControllerMode::Host),
            "script" => Ok(ControllerMode::Script),
            _ => Err(ConfigError::InvalidMode),
        }
    }
}

/// Complete controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LcdConfig {
    /// Top-level mode
    pub mode: ControllerMode,
    /// Firmware tick period (microseconds per controller cycle)
    pub tick_us: u32,
    /// Peripheral bus timing
    pub timing: TimingConfig,
    /// Script player timing
    pub script: ScriptTiming,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            mode: ControllerMode::Host,
            tick_us: DEFAULT_TICK_US,
            timing: TimingConfig::default(),
            script: ScriptTiming::default(),
        }
    }
}

impl LcdConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_us == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.tick_us < MIN_TICK_US {
            return Err(ConfigError::TickTooShort);
        }
        self.timing.validate()?;
        self.script.validate()
    }
}
