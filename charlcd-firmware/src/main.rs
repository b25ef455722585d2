//! charlcd - Character LCD Controller Firmware
//!
//! Drives an HD44780-compatible 16x2 display from an RP2040 over an 8-bit
//! parallel bus. Depending on `lcd.toml` the display is fed either by the
//! bootstrap host routine through the register interface or by the
//! autonomous demo script.
//!
//! Pins: DB0-DB7 on GPIO2-GPIO9, RS on GPIO10, E on GPIO11.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use {defmt_rtt as _, panic_probe as _};

use charlcd_core::config::{parse_config, ControllerMode, LcdConfig};
use charlcd_core::script::{Script, ScriptPlayer};
use charlcd_core::Controller;
use charlcd_drivers::lcd::{LcdPeripheral, ParallelBus, ScriptDisplay};

use crate::tasks::LcdBus;

/// Embedded configuration (compiled into firmware)
/// Edit lcd.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../lcd.toml");

mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("charlcd firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    info!(
        "Mode {}, tick {} us, busy window {} cycles",
        config.mode,
        config.tick_us,
        config.timing.busy_cycles()
    );

    // Everything starts low: E idle, command register selected
    let bus: LcdBus = ParallelBus::new(
        [
            Output::new(p.PIN_2, Level::Low),
            Output::new(p.PIN_3, Level::Low),
            Output::new(p.PIN_4, Level::Low),
            Output::new(p.PIN_5, Level::Low),
            Output::new(p.PIN_6, Level::Low),
            Output::new(p.PIN_7, Level::Low),
            Output::new(p.PIN_8, Level::Low),
            Output::new(p.PIN_9, Level::Low),
        ],
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
    );

    match config.mode {
        ControllerMode::Host => {
            let controller = unwrap!(Controller::new(config.timing));
            let lcd = unwrap!(LcdPeripheral::new(controller, bus));
            spawner
                .spawn(tasks::sequencer_task(lcd, config.tick_us))
                .unwrap();
            spawner.spawn(tasks::bootstrap_task()).unwrap();
        }
        ControllerMode::Script => {
            let script = unwrap!(Script::demo_16x2());
            let player = unwrap!(ScriptPlayer::with_timing(script, config.script));
            let lcd = unwrap!(ScriptDisplay::new(player, bus));
            spawner
                .spawn(tasks::script_task(lcd, config.tick_us))
                .unwrap();
        }
    }

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Parse the embedded lcd.toml
///
/// build.rs already rejects a bad file, so the fallback only matters when
/// the parsers disagree.
fn load_config() -> LcdConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            LcdConfig::default()
        }
    }
}
