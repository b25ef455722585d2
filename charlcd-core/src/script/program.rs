//! Fixed request scripts for the autonomous player

use heapless::Vec;

use crate::command::{set_ddram_address, INIT_SEQUENCE, LINE2_ADDRESS};
use crate::request::Request;

/// Maximum requests in a script
pub const MAX_SCRIPT_LEN: usize = 64;

/// Script construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScriptError {
    /// A script needs at least one request
    Empty,
    /// More than [`MAX_SCRIPT_LEN`] requests
    TooLong,
}

/// Immutable, non-empty ordered list of requests
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Script {
    requests: Vec<Request, MAX_SCRIPT_LEN>,
}

impl Script {
    /// Build a script from a slice of requests
    pub fn new(requests: &[Request]) -> Result<Self, ScriptError> {
        if requests.is_empty() {
            return Err(ScriptError::Empty);
        }
        let requests = Vec::from_slice(requests).map_err(|_| ScriptError::TooLong)?;
        Ok(Self { requests })
    }

    /// Display init sequence followed by one line of text
    pub fn init_and_text(text: &[u8]) -> Result<Self, ScriptError> {
        let mut script = ScriptBuilder::new();
        script.init()?;
        script.text(text)?;
        script.build()
    }

    /// Two-line demo for a 16x2 display
    pub fn demo_16x2() -> Result<Self, ScriptError> {
        let mut script = ScriptBuilder::new();
        script.init()?;
        script.text(b"0123456789ABCDEF")?;
        script.push(set_ddram_address(LINE2_ADDRESS))?;
        script.text(b"abcdefghijklmnop")?;
        script.build()
    }

    /// Number of requests
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Always false; scripts are non-empty by construction
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Request at an index
    pub fn get(&self, index: usize) -> Option<Request> {
        self.requests.get(index).copied()
    }

    /// Index of the final request
    pub fn last_index(&self) -> usize {
        self.requests.len() - 1
    }

    /// All requests in order
    pub fn as_slice(&self) -> &[Request] {
        &self.requests
    }
}

/// Incremental script construction
#[derive(Debug, Default)]
struct ScriptBuilder {
    requests: Vec<Request, MAX_SCRIPT_LEN>,
}

impl ScriptBuilder {
    fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, request: Request) -> Result<(), ScriptError> {
        self.requests.push(request).map_err(|_| ScriptError::TooLong)
    }

    fn init(&mut self) -> Result<(), ScriptError> {
        for cmd in INIT_SEQUENCE {
            self.push(Request::command(cmd))?;
        }
        Ok(())
    }

    fn text(&mut self, text: &[u8]) -> Result<(), ScriptError> {
        for &c in text {
            self.push(Request::data(c))?;
        }
        Ok(())
    }

    fn build(self) -> Result<Script, ScriptError> {
        Script::new(&self.requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Script::new(&[]), Err(ScriptError::Empty));
    }

    #[test]
    fn test_too_long_rejected() {
        let requests = [Request::data(b'.'); MAX_SCRIPT_LEN + 1];
        assert_eq!(Script::new(&requests), Err(ScriptError::TooLong));
        assert!(Script::new(&requests[..MAX_SCRIPT_LEN]).is_ok());
    }

    #[test]
    fn test_demo_layout() {
        let script = Script::demo_16x2().unwrap();
        assert_eq!(script.len(), 4 + 16 + 1 + 16);
        assert_eq!(script.get(0), Some(Request::command(0x38)));
        assert_eq!(script.get(3), Some(Request::command(0x01)));
        assert_eq!(script.get(4), Some(Request::data(b'0')));
        assert_eq!(script.get(20), Some(Request::command(0xC0)));
        assert_eq!(script.get(36), Some(Request::data(b'p')));
        assert_eq!(script.last_index(), 36);
        assert_eq!(script.get(37), None);
    }

    #[test]
    fn test_init_and_text() {
        let script = Script::init_and_text(b"Hi").unwrap();
        assert_eq!(
            script.as_slice(),
            &[
                Request::command(0x38),
                Request::command(0x0E),
                Request::command(0x06),
                Request::command(0x01),
                Request::data(b'H'),
                Request::data(b'i'),
            ]
        );
    }
}
