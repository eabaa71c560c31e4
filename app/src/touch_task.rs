use embassy_time::Timer;
use log::info;

use crate::hardware::{PenIrqLine, TouchCs};

/// Time the pen must stay down before a press is reported.
const DEBOUNCE_MS: u64 = 20;

#[embassy_executor::task()]
pub async fn touch_task(_cs: TouchCs, mut pen: PenIrqLine) {
    let mut presses: u32 = 0;
    loop {
        pen.wait_for_press().await.expect("Pen IRQ wait failed");
        Timer::after_millis(DEBOUNCE_MS).await;
        if !pen.is_pressed().expect("Pen IRQ read failed") {
            continue;
        }

        presses = presses.wrapping_add(1);
        info!("Pen down ({presses})");

        pen.wait_for_release().await.expect("Pen IRQ wait failed");
        info!("Pen up");
    }
}
