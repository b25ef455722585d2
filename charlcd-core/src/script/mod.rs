//! Autonomous script player
//!
//! Alternate top level with no register interface: a fixed script is
//! strobed onto the display bus once, in order.

pub mod player;
pub mod program;

pub use player::{PlayerEvent, PlayerState, ScriptPlayer};
pub use program::{Script, ScriptError, MAX_SCRIPT_LEN};
