//! Autonomous script task
//!
//! Replays the script without any host involvement, then leaves the bus
//! parked on the last entry.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::{Duration, Ticker};

use charlcd_core::script::PlayerEvent;
use charlcd_drivers::lcd::ScriptDisplay;

use super::LcdBus;

#[embassy_executor::task]
pub async fn script_task(mut lcd: ScriptDisplay<LcdBus>, tick_us: u32) {
    info!(
        "Script task started, {} entries",
        lcd.player().script().len()
    );

    let mut ticker = Ticker::every(Duration::from_micros(u64::from(tick_us)));

    while !lcd.is_done() {
        ticker.next().await;

        match lcd.tick() {
            Ok(Some(PlayerEvent::Strobe { index, request })) => {
                debug!("Strobe {}: {}", index, request)
            }
            Ok(Some(PlayerEvent::Finished)) => info!("Script finished"),
            Ok(None) => {}
            Err(e) => warn!("Display bus error: {}", e),
        }

        // Ticker may be behind; let the other tasks run
        yield_now().await;
    }
}
