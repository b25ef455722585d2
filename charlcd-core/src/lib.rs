//! Board-agnostic core logic for the character LCD controller
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - Request encoding for the single controller register
//! - Register interface (busy flag, request latch)
//! - Timing sequencer (SETUP → ENABLE → HOLD → WAIT_FOR_COMPLETE)
//! - Display bus line projection
//! - Autonomous script player
//! - Host bootstrap routine and a clocked port for simulation
//! - Configuration types and parser
//!
//! # Timing
//!
//! One call to [`Controller::tick`](controller::Controller::tick) is one
//! clock edge. Every state of the sequencer lasts a fixed number of edges,
//! so the busy window of a request is the sum of the four configured
//! durations (25032 cycles with the defaults).

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod command;
pub mod config;
pub mod controller;
pub mod host;
pub mod request;
pub mod script;
pub mod sequencer;
pub mod traits;

pub use bus::BusLines;
pub use controller::Controller;
pub use request::{RegisterSelect, Request};
