//! Character LCD bus drivers

pub mod parallel;
pub mod peripheral;

pub use parallel::{ParallelBus, DATA_LINES};
pub use peripheral::{LcdPeripheral, ScriptDisplay};
