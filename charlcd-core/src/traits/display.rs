//! Display bus output trait

use crate::bus::BusLines;

/// Errors driving the physical display bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// A GPIO refused the new level
    Pin,
}

/// Something that puts [`BusLines`] onto wires
///
/// Called once per controller cycle with the freshly projected lines.
/// Implementations must settle data and RS no later than enable.
pub trait DisplayBus {
    /// Drive the bus to the given levels
    fn apply(&mut self, lines: BusLines) -> Result<(), BusError>;
}
