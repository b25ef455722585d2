//! Simulated clock driving a controller from the host side

use crate::controller::Controller;
use crate::sequencer::SequencerEvent;
use crate::traits::{PortAccess, RegisterPort};

/// Register port backed by an owned [`Controller`]
///
/// Each bus access is one clock edge. Time only advances through
/// [`RegisterPort::cycle`] and [`ClockedPort::idle`], so tests can count
/// exact cycles.
#[derive(Debug, Clone, Default)]
pub struct ClockedPort {
    controller: Controller,
    cycles: u64,
    accepted: u32,
    last_event: Option<SequencerEvent>,
}

impl ClockedPort {
    /// Wrap a controller
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            cycles: 0,
            accepted: 0,
            last_event: None,
        }
    }

    /// Run idle cycles
    pub fn idle(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.cycle(PortAccess::Idle);
        }
    }

    /// Cycles elapsed since construction
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Writes the controller has accepted
    pub fn accepted_writes(&self) -> u32 {
        self.accepted
    }

    /// Most recent sequencer event
    pub fn last_event(&self) -> Option<SequencerEvent> {
        self.last_event
    }

    /// The wrapped controller
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Give back the controller
    pub fn into_inner(self) -> Controller {
        self.controller
    }
}

impl RegisterPort for ClockedPort {
    fn cycle(&mut self, access: PortAccess) -> u16 {
        let event = self.controller.tick(access);
        self.cycles += 1;

        if let Some(event) = event {
            if matches!(event, SequencerEvent::Started(_)) {
                self.accepted += 1;
            }
            self.last_event = Some(event);
        }

        self.controller.read_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Request;
    use crate::traits::LCD_ADDR;

    #[test]
    fn test_each_access_is_one_cycle() {
        let mut port = ClockedPort::default();
        port.read(LCD_ADDR);
        port.write(LCD_ADDR, 0x0038);
        port.idle(10);
        assert_eq!(port.cycles(), 12);
    }

    #[test]
    fn test_accepted_count() {
        let mut port = ClockedPort::default();
        port.write(LCD_ADDR, 0x0038);
        port.write(LCD_ADDR, 0x000E);
        assert_eq!(port.accepted_writes(), 1);
        assert_eq!(port.controller().request(), Request::command(0x38));
        assert_eq!(
            port.last_event(),
            Some(SequencerEvent::Started(Request::command(0x38)))
        );
    }

    #[test]
    fn test_busy_poll_sees_previous_cycle() {
        let mut port = ClockedPort::default();
        assert!(!port.is_busy());
        port.write(LCD_ADDR, 0x0038);
        assert!(port.is_busy());

        port.idle(25032 - 2);
        // Flag clears on this read's edge; the read still returns 1
        assert!(port.is_busy());
        assert!(!port.controller().is_busy());
        assert!(!port.is_busy());
    }
}
