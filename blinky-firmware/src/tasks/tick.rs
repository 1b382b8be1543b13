//! Tick task
//!
//! Runs a fixed-rate ticker and forwards each tick to the device while the
//! tick gate is open.

use defmt::*;
use embassy_time::{Duration, Ticker};

use blinky_hal_rp2040::TickGate;

use crate::device::{DEVICE, TICK_GATE};

/// Tick task - drives the blink scheduler
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started ({} Hz)", TickGate::RATE_HZ);

    let mut ticker = Ticker::every(Duration::from_hz(TickGate::RATE_HZ));

    loop {
        ticker.next().await;

        if !TICK_GATE.is_open() {
            continue;
        }

        match DEVICE.with(|device| device.on_tick()) {
            Some(state) if !state.is_enabled() => {
                info!("Blink stopped by tick (timeout or touch)");
            }
            Some(_) => {}
            None => warn!("Tick before device init"),
        }
    }
}
