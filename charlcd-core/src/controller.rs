//! Register interface and peripheral top level
//!
//! Owns the register file and advances it once per clock edge:
//!
//! 1. The read path captures the busy flag into the read-data register.
//! 2. The write path latches a request if the flag was clear.
//! 3. The timing sequencer steps.
//!
//! The write path sees the busy flag as it was at the start of the cycle, so
//! a write presented on the edge that ends a sequence is still dropped.

use crate::bus::BusLines;
use crate::config::{ConfigError, TimingConfig};
use crate::request::Request;
use crate::sequencer::{step, Registers, SequencerEvent, SequencerState};
use crate::traits::{PortAccess, LCD_ADDR};

/// Character LCD peripheral controller
#[derive(Debug, Clone)]
pub struct Controller {
    timing: TimingConfig,
    regs: Registers,
    /// Registered read-data word, valid one cycle after a read
    read_data: u16,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            regs: Registers::new(),
            read_data: 0,
        }
    }
}

impl Controller {
    /// Create a controller with custom timing
    pub fn new(timing: TimingConfig) -> Result<Self, ConfigError> {
        timing.validate()?;
        Ok(Self {
            timing,
            regs: Registers::new(),
            read_data: 0,
        })
    }

    /// Return to power-on state
    pub fn reset(&mut self) {
        self.regs = Registers::new();
        self.read_data = 0;
    }

    /// Advance one clock edge with the given host access asserted
    pub fn tick(&mut self, access: PortAccess) -> Option<SequencerEvent> {
        match access {
            PortAccess::Idle => {}
            PortAccess::Read { addr } => self.read_busy(addr, true),
            PortAccess::Write { addr, data } => {
                self.write_request(addr, true, data);
            }
        }
        step(&self.timing, &mut self.regs)
    }

    /// Read path: capture the busy flag into the read-data register
    ///
    /// Other addresses leave the read-data register untouched.
    pub fn read_busy(&mut self, addr: u16, read_enable: bool) {
        if addr == LCD_ADDR && read_enable {
            self.read_data = self.regs.busy as u16;
        }
    }

    /// Write path: decode and latch a payload when idle
    ///
    /// Returns whether the write was accepted. A write while busy is dropped
    /// with no other effect; the host has to retry after polling.
    pub fn write_request(&mut self, addr: u16, write_enable: bool, payload: u16) -> bool {
        if addr != LCD_ADDR || !write_enable {
            return false;
        }
        self.regs.latch(Request::from_payload(payload))
    }

    /// Word the host sees on its data bus after a read
    pub fn read_data(&self) -> u16 {
        self.read_data
    }

    /// Current busy flag
    pub fn is_busy(&self) -> bool {
        self.regs.busy
    }

    /// Latched request (stale while idle)
    pub fn request(&self) -> Request {
        self.regs.request
    }

    /// Current sequencer state
    pub fn state(&self) -> SequencerState {
        self.regs.state
    }

    /// Register file snapshot
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Configured timing
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// Display bus levels for the current cycle
    pub fn bus_lines(&self) -> BusLines {
        BusLines::project(self.regs.request, self.regs.state.enable())
    }
}
