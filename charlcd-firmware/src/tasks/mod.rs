//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

use embassy_rp::gpio::Output;

use charlcd_drivers::lcd::ParallelBus;

pub mod bootstrap;
pub mod script;
pub mod sequencer;

pub use bootstrap::bootstrap_task;
pub use script::script_task;
pub use sequencer::sequencer_task;

/// Display bus on RP2040 GPIO
pub type LcdBus = ParallelBus<Output<'static>, Output<'static>, Output<'static>>;
