//! 8-bit parallel display bus
//!
//! Drives DB0-DB7, RS and E from [`BusLines`]. Only pins whose level changed
//! are written, and data/RS are always written before E so a rising strobe
//! never races the data it is meant to latch.

use charlcd_core::traits::{BusError, DisplayBus};
use charlcd_core::BusLines;
use embedded_hal::digital::{OutputPin, PinState};

/// Number of data lines
pub const DATA_LINES: usize = 8;

/// Parallel bus over GPIO output pins
pub struct ParallelBus<D, RS, E> {
    /// DB0 first
    data: [D; DATA_LINES],
    rs: RS,
    e: E,
    /// Levels last written; None forces a full rewrite
    last: Option<BusLines>,
}

impl<D: OutputPin, RS: OutputPin, E: OutputPin> ParallelBus<D, RS, E> {
    /// Take ownership of the bus pins
    ///
    /// Pin levels are unknown until the first [`DisplayBus::apply`], which
    /// writes every pin.
    pub fn new(data: [D; DATA_LINES], rs: RS, e: E) -> Self {
        Self {
            data,
            rs,
            e,
            last: None,
        }
    }

    /// Give back the pins
    pub fn release(self) -> ([D; DATA_LINES], RS, E) {
        (self.data, self.rs, self.e)
    }

    /// Levels last written successfully
    pub fn lines(&self) -> Option<BusLines> {
        self.last
    }

    fn write_changed(&mut self, lines: BusLines) -> Result<(), BusError> {
        let prev = self.last;

        for (bit, pin) in self.data.iter_mut().enumerate() {
            let mask = 1u8 << bit;
            let high = lines.data & mask != 0;
            if prev.map_or(true, |p| (p.data & mask != 0) != high) {
                pin.set_state(PinState::from(high))
                    .map_err(|_| BusError::Pin)?;
            }
        }

        let rs_high = lines.register_select.is_high();
        if prev.map_or(true, |p| p.register_select != lines.register_select) {
            self.rs
                .set_state(PinState::from(rs_high))
                .map_err(|_| BusError::Pin)?;
        }

        if prev.map_or(true, |p| p.enable != lines.enable) {
            self.e
                .set_state(PinState::from(lines.enable))
                .map_err(|_| BusError::Pin)?;
        }

        Ok(())
    }
}

impl<D: OutputPin, RS: OutputPin, E: OutputPin> DisplayBus for ParallelBus<D, RS, E> {
    fn apply(&mut self, lines: BusLines) -> Result<(), BusError> {
        match self.write_changed(lines) {
            Ok(()) => {
                self.last = Some(lines);
                Ok(())
            }
            Err(e) => {
                // Some pins may already be at the new level
                self.last = None;
                Err(e)
            }
        }
    }
}
