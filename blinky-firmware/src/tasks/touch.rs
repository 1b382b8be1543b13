//! Touch edge task
//!
//! Owns the touch input line. Every edge refreshes the mirrored level read
//! by the scheduler on each tick; an edge into the touched level cancels
//! the blink while the edge watch is armed.

use defmt::*;
use embassy_rp::gpio::Input;

use crate::board::TOUCH_ACTIVE_LOW;
use crate::device::{DEVICE, EDGE_GATE, TOUCH_LEVEL};

/// Touch task - delivers touch edges to the scheduler
#[embassy_executor::task]
pub async fn touch_task(mut input: Input<'static>) {
    info!("Touch task started");

    TOUCH_LEVEL.set(input.is_high());

    loop {
        input.wait_for_any_edge().await;

        let high = input.is_high();
        TOUCH_LEVEL.set(high);

        let touched = high != TOUCH_ACTIVE_LOW;
        if !touched || !EDGE_GATE.is_open() {
            continue;
        }

        debug!("Touch edge");
        if let Some(state) = DEVICE.with(|device| device.on_touch_edge()) {
            if !state.is_enabled() {
                info!("Blink cancelled by touch");
            }
        }
    }
}
