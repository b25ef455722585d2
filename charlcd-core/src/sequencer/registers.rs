//! Controller register file
//!
//! Everything the hardware keeps between clock edges. The struct is owned by
//! a single controller instance and only ever advanced through `&mut`.

use super::state::SequencerState;
use crate::request::Request;

/// Clocked state of the peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Registers {
    /// Set while a latched request is being sequenced
    pub busy: bool,
    /// Latched request; only rewritten while `busy` is clear
    pub request: Request,
    /// Current sequencer state
    pub state: SequencerState,
    /// Cycles spent in `state` so far
    pub counter: u32,
}

impl Registers {
    /// Power-on register values
    pub const fn new() -> Self {
        Self {
            busy: false,
            request: Request::command(0),
            state: SequencerState::WaitForData,
            counter: 0,
        }
    }

    /// Latch a request if idle
    ///
    /// Returns false (and changes nothing) while busy.
    pub fn latch(&mut self, request: Request) -> bool {
        if self.busy {
            return false;
        }
        self.request = request;
        self.busy = true;
        true
    }
}
