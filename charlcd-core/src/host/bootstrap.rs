//! Host bootstrap routine
//!
//! What the host firmware does after reset: send the display init
//! sequence, then stream a null-terminated string as character data, polling
//! the busy flag to completion after every write.
//!
//! The routine is written as a step machine that issues exactly one bus
//! access per step, so the same logic runs against a simulated
//! [`RegisterPort`] or, one access per timer tick, on hardware.
//!
//! There is no poll timeout. If the controller never clears busy, the host
//! waits forever.

use crate::command::INIT_SEQUENCE;
use crate::request::Request;
use crate::traits::{PortAccess, RegisterPort, BUSY_BIT, LCD_ADDR};

/// Position in the bootstrap sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Cursor {
    /// Index into the init sequence
    Init(usize),
    /// Index into the string
    Text(usize),
}

impl Cursor {
    fn next(self) -> Self {
        match self {
            Cursor::Init(i) if i + 1 < INIT_SEQUENCE.len() => Cursor::Init(i + 1),
            Cursor::Init(_) => Cursor::Text(0),
            Cursor::Text(i) => Cursor::Text(i + 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    /// Write the request at the cursor
    Write(Cursor),
    /// Poll busy, then write at the cursor
    Poll(Cursor),
    /// Terminator reached
    Halted,
}

/// Bus activity of a finished bootstrap run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BootstrapReport {
    /// Register writes issued
    pub writes: u32,
    /// Busy-flag reads issued
    pub polls: u32,
}

/// Step-wise host bootstrap routine
#[derive(Debug, Clone)]
pub struct BootstrapHost<'a> {
    text: &'a [u8],
    phase: Phase,
    report: BootstrapReport,
}

impl<'a> BootstrapHost<'a> {
    /// Prepare to initialize the display and print `text`
    ///
    /// `text` ends at its first zero byte, or at the end of the slice.
    pub fn new(text: &'a [u8]) -> Self {
        Self {
            text,
            phase: Phase::Write(Cursor::Init(0)),
            report: BootstrapReport::default(),
        }
    }

    /// Bus access for the next cycle, or None once halted
    pub fn next_access(&mut self) -> Option<PortAccess> {
        match self.phase {
            Phase::Halted => None,
            Phase::Poll(_) => Some(PortAccess::Read { addr: LCD_ADDR }),
            Phase::Write(cursor) => match self.request_at(cursor) {
                Some(request) => Some(PortAccess::Write {
                    addr: LCD_ADDR,
                    data: request.to_payload(),
                }),
                None => {
                    self.phase = Phase::Halted;
                    None
                }
            },
        }
    }

    /// Feed back the read-data word after the access from `next_access`
    pub fn complete(&mut self, read_data: u16) {
        match self.phase {
            Phase::Write(cursor) => {
                self.report.writes += 1;
                self.phase = Phase::Poll(cursor.next());
            }
            Phase::Poll(cursor) => {
                self.report.polls += 1;
                if read_data & BUSY_BIT == 0 {
                    self.phase = Phase::Write(cursor);
                }
            }
            Phase::Halted => {}
        }
    }

    /// Whether the terminator has been reached
    pub fn is_halted(&self) -> bool {
        self.phase == Phase::Halted
    }

    /// Activity so far
    pub fn report(&self) -> BootstrapReport {
        self.report
    }

    /// Run to completion against a port (blocks while the port reads busy)
    pub fn run<P: RegisterPort>(&mut self, port: &mut P) -> BootstrapReport {
        while let Some(access) = self.next_access() {
            let word = port.cycle(access);
            self.complete(word);
        }
        self.report
    }

    fn request_at(&self, cursor: Cursor) -> Option<Request> {
        match cursor {
            Cursor::Init(i) => INIT_SEQUENCE.get(i).map(|&cmd| Request::command(cmd)),
            Cursor::Text(i) => match self.text.get(i) {
                Some(&c) if c != 0 => Some(Request::data(c)),
                _ => None,
            },
        }
    }
}

/// Poll the busy flag until it reads clear
///
/// Returns the number of reads. Never gives up.
pub fn wait_ready<P: RegisterPort>(port: &mut P) -> u32 {
    let mut polls = 1;
    while port.is_busy() {
        polls += 1;
    }
    polls
}

/// Write one request and wait for the controller to finish it
pub fn write_and_wait<P: RegisterPort>(port: &mut P, request: Request) -> u32 {
    port.write(LCD_ADDR, request.to_payload());
    wait_ready(port)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ClockedPort;
    use crate::sequencer::SequencerEvent;

    /// Polls per request: the flag clears on the edge of the 25032nd read,
    /// which still returns 1, and the next read returns 0
    const POLLS_PER_REQUEST: u32 = 25033;

    #[test]
    fn test_hello_boneless() {
        let mut port = ClockedPort::default();
        let mut host = BootstrapHost::new(b"Hello, boneless!\0");

        let report = host.run(&mut port);

        assert!(host.is_halted());
        assert_eq!(report.writes, 20);
        assert_eq!(port.accepted_writes(), 20);
        assert_eq!(report.polls, 20 * POLLS_PER_REQUEST);
        assert_eq!(port.cycles(), (report.writes + report.polls) as u64);
        assert_eq!(port.last_event(), Some(SequencerEvent::Completed));
        assert_eq!(port.controller().request(), Request::data(b'!'));
    }

    #[test]
    fn test_written_sequence() {
        let mut port = ClockedPort::default();
        let mut host = BootstrapHost::new(b"Hi\0ignored");
        let mut written = heapless::Vec::<u16, 8>::new();

        while let Some(access) = host.next_access() {
            if let PortAccess::Write { data, .. } = access {
                written.push(data).unwrap();
            }
            let word = port.cycle(access);
            host.complete(word);
        }

        assert_eq!(
            written.as_slice(),
            &[0x0038, 0x000E, 0x0006, 0x0001, 0x0148, 0x0169]
        );
    }

    #[test]
    fn test_unterminated_text_ends_at_slice() {
        let mut port = ClockedPort::default();
        let report = BootstrapHost::new(b"Hello, world!").run(&mut port);
        assert_eq!(report.writes, 4 + 13);
        assert_eq!(port.accepted_writes(), 17);
    }

    #[test]
    fn test_empty_text_sends_init_only() {
        let mut port = ClockedPort::default();
        let report = BootstrapHost::new(b"\0").run(&mut port);
        assert_eq!(report.writes, 4);
        assert_eq!(port.accepted_writes(), 4);
    }

    #[test]
    fn test_halted_is_terminal() {
        let mut port = ClockedPort::default();
        let mut host = BootstrapHost::new(b"");
        host.run(&mut port);
        let cycles = port.cycles();

        assert_eq!(host.next_access(), None);
        host.complete(1);
        assert!(host.is_halted());
        assert_eq!(host.run(&mut port).writes, 4);
        assert_eq!(port.cycles(), cycles);
    }

    #[test]
    fn test_write_and_wait() {
        let mut port = ClockedPort::default();
        let polls = write_and_wait(&mut port, Request::command(0x38));
        assert_eq!(polls, POLLS_PER_REQUEST);
        assert!(!port.controller().is_busy());

        // Immediately ready: a single read
        assert_eq!(wait_ready(&mut port), 1);
    }
}
