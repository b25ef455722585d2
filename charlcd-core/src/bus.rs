//! Display bus lines
//!
//! The three outputs going to the display are never stored. They are
//! recomputed every cycle from the latched request and whether the current
//! state strobes enable.

use crate::request::{RegisterSelect, Request};

/// Levels of the physical display bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusLines {
    /// DB0-DB7
    pub data: u8,
    /// RS line
    pub register_select: RegisterSelect,
    /// E strobe
    pub enable: bool,
}

impl BusLines {
    /// Project a request and enable level onto the bus
    pub const fn project(request: Request, enable: bool) -> Self {
        Self {
            data: request.data,
            register_select: request.register_select,
            enable,
        }
    }

    /// Request currently presented on data/RS
    pub const fn request(&self) -> Request {
        Request {
            register_select: self.register_select,
            data: self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection() {
        let lines = BusLines::project(Request::data(b'H'), true);
        assert_eq!(lines.data, b'H');
        assert_eq!(lines.register_select, RegisterSelect::Data);
        assert!(lines.enable);
        assert_eq!(lines.request(), Request::data(b'H'));
    }

    #[test]
    fn test_enable_independent_of_request() {
        let low = BusLines::project(Request::command(0x38), false);
        let high = BusLines::project(Request::command(0x38), true);
        assert_eq!(low.request(), high.request());
        assert!(!low.enable);
    }
}
