//! Sequencer task
//!
//! Owns the controller. Every tick it takes at most one host access from
//! [`HOST_ACCESS`], advances the controller one edge, and drives the pins.
//!
//! A late [`Ticker`] completes immediately until it has caught up, so the
//! loop yields every tick to let the host task queue its next access.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::{Duration, Ticker};

use charlcd_core::sequencer::SequencerEvent;
use charlcd_core::traits::PortAccess;
use charlcd_drivers::lcd::LcdPeripheral;

use super::LcdBus;
use crate::channels::{HOST_ACCESS, READ_DATA};

#[embassy_executor::task]
pub async fn sequencer_task(mut lcd: LcdPeripheral<LcdBus>, tick_us: u32) {
    info!("Sequencer task started, tick {} us", tick_us);

    let mut ticker = Ticker::every(Duration::from_micros(u64::from(tick_us)));

    loop {
        ticker.next().await;

        let access = HOST_ACCESS.try_receive().unwrap_or_default();

        match lcd.tick(access) {
            Ok(Some(event)) => log_event(event),
            Ok(None) => {}
            Err(e) => warn!("Display bus error: {}", e),
        }

        if access != PortAccess::Idle {
            READ_DATA.signal(lcd.read_data());
        }

        yield_now().await;
    }
}

fn log_event(event: SequencerEvent) {
    match event {
        SequencerEvent::Started(request) => debug!("Request latched: {}", request),
        SequencerEvent::Completed => debug!("Request complete"),
        SequencerEvent::EnableRise | SequencerEvent::EnableFall => trace!("{}", event),
    }
}
