//! Fault indicator task
//!
//! Blinks the status LED while the meter reports a wiring fault and keeps
//! it dark otherwise.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use crate::channels::WIRING_FAULT;

/// Blink half-period
const BLINK_MS: u64 = 250;

/// Status LED task
#[embassy_executor::task]
pub async fn status_led_task(mut led: Output<'static>) {
    info!("Status LED task started");

    let mut ticker = Ticker::every(Duration::from_millis(BLINK_MS));
    let mut faulted = false;

    loop {
        if let Some(state) = WIRING_FAULT.try_take() {
            faulted = state;
            if !faulted {
                led.set_low();
            }
        }

        if faulted {
            led.toggle();
        }

        ticker.next().await;
    }
}
