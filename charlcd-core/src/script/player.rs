//! Autonomous script player
//!
//! Replays a [`Script`] without a host: SETUP for one cycle, HOLD for one
//! cycle with enable high, then WAIT for the configured number of cycles
//! before moving to the next entry. After the last entry the player enters
//! DONE and stays there. It does not start the script over.

use super::program::Script;
use crate::bus::BusLines;
use crate::config::{ConfigError, ScriptTiming};
use crate::request::Request;

/// Script player states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerState {
    /// Present the current entry, enable low
    #[default]
    Setup,
    /// Enable high for one cycle
    Hold,
    /// Count down before the next entry
    Wait,
    /// Script finished (terminal)
    Done,
}

impl PlayerState {
    /// Whether the enable strobe is high in this state
    pub const fn enable(self) -> bool {
        matches!(self, PlayerState::Hold)
    }
}

/// Player transitions worth reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerEvent {
    /// Enable strobed for the entry at `index`
    Strobe { index: usize, request: Request },
    /// Last entry finished, DONE entered
    Finished,
}

/// Host-less controller replaying a fixed script
#[derive(Debug, Clone)]
pub struct ScriptPlayer {
    script: Script,
    timing: ScriptTiming,
    state: PlayerState,
    index: usize,
    counter: u32,
}

impl ScriptPlayer {
    /// Create a player with default timing
    pub fn new(script: Script) -> Self {
        Self {
            script,
            timing: ScriptTiming::default(),
            state: PlayerState::Setup,
            index: 0,
            counter: 0,
        }
    }

    /// Create a player with custom timing
    pub fn with_timing(script: Script, timing: ScriptTiming) -> Result<Self, ConfigError> {
        timing.validate()?;
        let mut player = Self::new(script);
        player.timing = timing;
        Ok(player)
    }

    /// Advance one clock edge
    pub fn tick(&mut self) -> Option<PlayerEvent> {
        match self.state {
            PlayerState::Setup => {
                self.state = PlayerState::Hold;
                None
            }
            PlayerState::Hold => {
                self.counter = 0;
                self.state = PlayerState::Wait;
                Some(PlayerEvent::Strobe {
                    index: self.index,
                    request: self.current(),
                })
            }
            PlayerState::Wait => {
                self.counter += 1;
                if self.counter < self.timing.wait_cycles {
                    return None;
                }
                self.counter = 0;

                if self.index == self.script.last_index() {
                    self.state = PlayerState::Done;
                    Some(PlayerEvent::Finished)
                } else {
                    self.index += 1;
                    self.state = PlayerState::Setup;
                    None
                }
            }
            PlayerState::Done => None,
        }
    }

    /// Current state
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Index of the entry on the bus
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the script has finished
    pub fn is_done(&self) -> bool {
        self.state == PlayerState::Done
    }

    /// The script being played
    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Display bus levels for the current cycle
    pub fn bus_lines(&self) -> BusLines {
        BusLines::project(self.current(), self.state.enable())
    }

    fn current(&self) -> Request {
        // index never passes last_index
        self.script.get(self.index).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello() -> Script {
        Script::new(&[
            Request::command(0x01),
            Request::data(b'H'),
            Request::data(b'i'),
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let player = ScriptPlayer::new(hello());
        assert_eq!(player.state(), PlayerState::Setup);
        assert_eq!(player.index(), 0);
        assert_eq!(player.bus_lines(), BusLines::project(Request::command(0x01), false));
    }

    #[test]
    fn test_entry_period() {
        let mut player = ScriptPlayer::new(hello());

        // SETUP, HOLD, then 20 WAIT cycles
        assert_eq!(player.tick(), None);
        assert_eq!(player.state(), PlayerState::Hold);
        assert!(player.bus_lines().enable);

        assert!(matches!(player.tick(), Some(PlayerEvent::Strobe { index: 0, .. })));
        for _ in 0..20 {
            assert_eq!(player.state(), PlayerState::Wait);
            assert!(!player.bus_lines().enable);
            player.tick();
        }
        assert_eq!(player.state(), PlayerState::Setup);
        assert_eq!(player.index(), 1);
    }

    #[test]
    fn test_visits_each_entry_once_then_done() {
        let script = Script::demo_16x2().unwrap();
        let len = script.len();
        let mut player = ScriptPlayer::new(script);

        let mut strobes = 0;
        let mut finished = 0;
        for _ in 0..len * 22 + 100 {
            match player.tick() {
                Some(PlayerEvent::Strobe { index, request }) => {
                    assert_eq!(index, strobes);
                    assert_eq!(Some(request), player.script().get(index));
                    strobes += 1;
                }
                Some(PlayerEvent::Finished) => finished += 1,
                None => {}
            }
        }

        assert_eq!(strobes, len);
        assert_eq!(finished, 1);
        assert!(player.is_done());
    }

    #[test]
    fn test_done_is_terminal() {
        let mut player = ScriptPlayer::new(Script::new(&[Request::data(b'!')]).unwrap());
        while !player.is_done() {
            player.tick();
        }

        let lines = player.bus_lines();
        for _ in 0..1000 {
            assert_eq!(player.tick(), None);
            assert_eq!(player.state(), PlayerState::Done);
            assert_eq!(player.index(), 0);
            assert_eq!(player.bus_lines(), lines);
        }
        assert!(!lines.enable);
        assert_eq!(lines.request(), Request::data(b'!'));
    }

    #[test]
    fn test_index_clamped_at_last_entry() {
        let mut player = ScriptPlayer::new(hello());
        while !player.is_done() {
            player.tick();
            assert!(player.index() <= 2);
        }
        assert_eq!(player.index(), 2);
    }

    #[test]
    fn test_custom_wait() {
        let timing = ScriptTiming { wait_cycles: 3 };
        let mut player = ScriptPlayer::with_timing(hello(), timing).unwrap();

        let mut cycles = 0;
        while !player.is_done() {
            player.tick();
            cycles += 1;
        }
        // 3 entries x (SETUP + HOLD + 3 WAIT)
        assert_eq!(cycles, 3 * 5);
    }

    #[test]
    fn test_zero_wait_rejected() {
        let timing = ScriptTiming { wait_cycles: 0 };
        assert_eq!(
            ScriptPlayer::with_timing(hello(), timing).err(),
            Some(ConfigError::ZeroDuration)
        );
    }
}
