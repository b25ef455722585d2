//! Sequencer state definition
//!
//! Each state other than `WaitForData` is held for a fixed number of clock
//! cycles taken from [`TimingConfig`].

use crate::config::TimingConfig;

/// Timing sequencer states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerState {
    /// Idle, waiting for the register interface to latch a request
    #[default]
    WaitForData,
    /// Data and RS driven, enable low
    Setup,
    /// Enable strobe high
    Enable,
    /// Enable low again, data and RS still driven
    Hold,
    /// Display executing the instruction
    WaitForComplete,
}

impl SequencerState {
    /// Whether the enable strobe is high in this state
    pub const fn enable(self) -> bool {
        matches!(self, SequencerState::Enable)
    }

    /// Number of cycles this state is held for, or None if it waits for data
    pub const fn duration(self, timing: &TimingConfig) -> Option<u32> {
        match self {
            SequencerState::WaitForData => None,
            SequencerState::Setup => Some(timing.setup_cycles),
            SequencerState::Enable => Some(timing.enable_cycles),
            SequencerState::Hold => Some(timing.hold_cycles),
            SequencerState::WaitForComplete => Some(timing.complete_cycles),
        }
    }

    /// State entered once this one's duration has elapsed
    pub const fn next(self) -> Self {
        use SequencerState::*;

        match self {
            WaitForData => Setup,
            Setup => Enable,
            Enable => Hold,
            Hold => WaitForComplete,
            WaitForComplete => WaitForData,
        }
    }
}
