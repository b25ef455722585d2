//! HD44780 instruction set
//!
//! Only the instructions the bootstrap routine and demo script issue are
//! named here. Everything else can still be sent as a raw command byte.

use crate::request::Request;

/// Function set: 8-bit interface, 2 lines, 5x8 dot font
pub const FUNCTION_SET_8BIT_2LINE: u8 = 0b0011_1000;

/// Display on, cursor on, blink off
pub const DISPLAY_ON_CURSOR: u8 = 0b0000_1110;

/// Entry mode: increment address, no display shift
pub const ENTRY_MODE_INCREMENT: u8 = 0b0000_0110;

/// Clear display and return home
pub const CLEAR_DISPLAY: u8 = 0b0000_0001;

/// Set DDRAM address (OR with a 7-bit address)
pub const SET_DDRAM_ADDRESS: u8 = 0b1000_0000;

/// DDRAM address of the first column on the second line
pub const LINE2_ADDRESS: u8 = 0x40;

/// Power-on initialization sequence, in issue order
pub const INIT_SEQUENCE: [u8; 4] = [
    FUNCTION_SET_8BIT_2LINE,
    DISPLAY_ON_CURSOR,
    ENTRY_MODE_INCREMENT,
    CLEAR_DISPLAY,
];

/// Request moving the cursor to a DDRAM address
pub const fn set_ddram_address(addr: u8) -> Request {
    Request::command(SET_DDRAM_ADDRESS | (addr & 0x7F))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_sequence_bytes() {
        assert_eq!(INIT_SEQUENCE, [0x38, 0x0E, 0x06, 0x01]);
    }

    #[test]
    fn test_second_line() {
        assert_eq!(set_ddram_address(LINE2_ADDRESS), Request::command(0xC0));
    }
}
