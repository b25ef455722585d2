//! Timing sequencer
//!
//! Turns one latched request into a SETUP → ENABLE → HOLD → WAIT_FOR_COMPLETE
//! bus sequence, counting clock cycles for every phase.

pub mod registers;
pub mod state;
pub mod timing;

pub use registers::Registers;
pub use state::SequencerState;
pub use timing::{step, SequencerEvent};
