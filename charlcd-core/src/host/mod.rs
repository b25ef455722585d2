//! Host side of the register protocol
//!
//! The host core itself is not modeled. This module provides the routine it
//! runs (busy polling, init sequence, string streaming) and a clocked port
//! so that routine can drive a [`Controller`](crate::controller::Controller)
//! cycle by cycle.

pub mod bootstrap;
pub mod clocked;

pub use bootstrap::{wait_ready, write_and_wait, BootstrapHost, BootstrapReport};
pub use clocked::ClockedPort;
