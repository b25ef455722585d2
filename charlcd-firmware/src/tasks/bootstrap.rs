//! Bootstrap host task
//!
//! Runs the boot routine against the register interface: the four init
//! commands, then the greeting, busy-polling after every write.

use defmt::*;

use charlcd_core::host::BootstrapHost;

use crate::channels::{HOST_ACCESS, READ_DATA};

/// Greeting written after init, null-terminated
const GREETING: &[u8] = b"Hello, boneless!\0";

#[embassy_executor::task]
pub async fn bootstrap_task() {
    info!("Bootstrap host started");

    let mut host = BootstrapHost::new(GREETING);

    while let Some(access) = host.next_access() {
        HOST_ACCESS.send(access).await;
        host.complete(READ_DATA.wait().await);
    }

    let report = host.report();
    info!(
        "Bootstrap halted: {} writes, {} polls",
        report.writes, report.polls
    );
}
