//! Abstraction traits
//!
//! These traits define the interface between the controller logic and
//! whatever surrounds it: the host bus on one side, GPIO pins on the other.

pub mod display;
pub mod port;

pub use display::{BusError, DisplayBus};
pub use port::{PortAccess, RegisterPort, BUSY_BIT, LCD_ADDR};
