//! Register port seen by the host
//!
//! The controller occupies a single address. Reading it returns the busy flag
//! in bit 0; writing it submits a request payload (bit 8 = RS, bits 0-7 =
//! data). Every access takes one controller clock cycle.

/// Address of the controller register
pub const LCD_ADDR: u16 = 0;

/// Busy flag position in the read word
pub const BUSY_BIT: u16 = 1;

/// Host bus activity during one clock cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortAccess {
    /// No access this cycle
    #[default]
    Idle,
    /// Read enable asserted
    Read { addr: u16 },
    /// Write enable asserted with a payload
    Write { addr: u16, data: u16 },
}

/// A clocked register port
///
/// Implementations advance their clock by one cycle per call to
/// [`RegisterPort::cycle`], which is what makes busy polling deterministic
/// in tests: the clock only moves when the host touches the bus.
pub trait RegisterPort {
    /// Perform one bus cycle and return the read-data word afterwards
    fn cycle(&mut self, access: PortAccess) -> u16;

    /// Read a register (result reflects the previous cycle)
    fn read(&mut self, addr: u16) -> u16 {
        self.cycle(PortAccess::Read { addr })
    }

    /// Write a register
    fn write(&mut self, addr: u16, data: u16) {
        self.cycle(PortAccess::Write { addr, data });
    }

    /// Read the controller's busy flag
    fn is_busy(&mut self) -> bool {
        self.read(LCD_ADDR) & BUSY_BIT != 0
    }
}
