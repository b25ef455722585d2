//! Display bus requests
//!
//! A request is what the host writes to the controller register: one byte for
//! the display data bus plus the register-select bit that tells the display
//! whether the byte is an instruction or character data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bit position of the register-select flag in a register payload
pub const RS_BIT: u16 = 1 << 8;

/// Mask for the data byte in a register payload
pub const DATA_MASK: u16 = 0x00FF;

/// Display register targeted by a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RegisterSelect {
    /// Instruction register (RS low)
    #[default]
    Command,
    /// Data register (RS high), i.e. a character
    Data,
}

impl RegisterSelect {
    /// Level of the RS line for this register
    pub const fn is_high(self) -> bool {
        matches!(self, RegisterSelect::Data)
    }

    /// Build from the RS line level
    pub const fn from_level(high: bool) -> Self {
        if high {
            RegisterSelect::Data
        } else {
            RegisterSelect::Command
        }
    }
}

/// A single display bus transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Request {
    /// Target register
    pub register_select: RegisterSelect,
    /// Byte placed on the data bus
    pub data: u8,
}

impl Request {
    /// Instruction request
    pub const fn command(data: u8) -> Self {
        Self {
            register_select: RegisterSelect::Command,
            data,
        }
    }

    /// Character data request
    pub const fn data(data: u8) -> Self {
        Self {
            register_select: RegisterSelect::Data,
            data,
        }
    }

    /// Decode a 16-bit register payload
    ///
    /// Bit 8 is the register select, bits 0-7 the data byte. Bits 9-15 are
    /// ignored.
    pub const fn from_payload(payload: u16) -> Self {
        Self {
            register_select: RegisterSelect::from_level(payload & RS_BIT != 0),
            data: (payload & DATA_MASK) as u8,
        }
    }

    /// Encode as a 16-bit register payload
    pub const fn to_payload(self) -> u16 {
        let rs = if self.register_select.is_high() { RS_BIT } else { 0 };
        rs | self.data as u16
    }
}

impl From<u16> for Request {
    fn from(payload: u16) -> Self {
        Self::from_payload(payload)
    }
}

impl From<Request> for u16 {
    fn from(request: Request) -> Self {
        request.to_payload()
    }
}
