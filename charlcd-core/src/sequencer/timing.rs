//! Timing sequencer step function
//!
//! Advances the register file by exactly one clock edge. The sequencer never
//! touches the latched request; it only counts cycles, walks the states and
//! clears the busy flag at the end of the sequence.

use super::registers::Registers;
use super::state::SequencerState;
use crate::config::TimingConfig;
use crate::request::Request;

/// Notable transitions, reported for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerEvent {
    /// Latched request picked up, SETUP entered
    Started(Request),
    /// Enable strobe went high
    EnableRise,
    /// Enable strobe went low
    EnableFall,
    /// Sequence finished, busy flag cleared
    Completed,
}

/// Advance the sequencer by one clock edge
///
/// Durations are expected to be non-zero (see [`TimingConfig::validate`]).
/// A zero duration is left after one cycle, like a duration of one.
pub fn step(timing: &TimingConfig, regs: &mut Registers) -> Option<SequencerEvent> {
    let duration = match regs.state.duration(timing) {
        Some(duration) => duration,
        None => {
            // WaitForData
            if !regs.busy {
                return None;
            }
            regs.state = SequencerState::Setup;
            regs.counter = 0;
            return Some(SequencerEvent::Started(regs.request));
        }
    };

    regs.counter += 1;
    if regs.counter < duration {
        return None;
    }

    regs.counter = 0;
    regs.state = regs.state.next();

    match regs.state {
        SequencerState::Enable => Some(SequencerEvent::EnableRise),
        SequencerState::Hold => Some(SequencerEvent::EnableFall),
        SequencerState::WaitForData => {
            regs.busy = false;
            Some(SequencerEvent::Completed)
        }
        SequencerState::Setup | SequencerState::WaitForComplete => None,
    }
}
