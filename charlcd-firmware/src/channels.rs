//! Inter-task communication channels
//!
//! The host task reaches the controller only through these: one access in,
//! one read word back, per controller tick.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use charlcd_core::traits::PortAccess;

/// Host accesses waiting for the next tick
///
/// Capacity 1: the host never has more than one access in flight.
pub static HOST_ACCESS: Channel<CriticalSectionRawMutex, PortAccess, 1> = Channel::new();

/// Read-data word after the tick that consumed a host access
pub static READ_DATA: Signal<CriticalSectionRawMutex, u16> = Signal::new();
