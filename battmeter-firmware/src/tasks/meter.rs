//! Battery meter refresh task
//!
//! Runs one read-encode-write cycle per tick. A wiring fault skips the
//! display write, so the last good value stays on screen.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::board::BoardMeter;
use crate::channels::WIRING_FAULT;

/// Meter task - refreshes the display every `refresh_ms`
#[embassy_executor::task]
pub async fn meter_task(mut meter: BoardMeter, refresh_ms: u32) {
    info!("Meter task started (refresh every {} ms)", refresh_ms);

    let mut ticker = Ticker::every(Duration::from_millis(refresh_ms as u64));
    let mut faulted_cycles: u32 = 0;

    loop {
        match meter.refresh() {
            Ok(refresh) => {
                if faulted_cycles > 0 {
                    info!("Wiring restored after {} cycles", faulted_cycles);
                    faulted_cycles = 0;
                    WIRING_FAULT.signal(false);
                }
                debug!(
                    "{} mV, {}% ({:?}) -> {=str}",
                    refresh.reading.millivolts(),
                    refresh.reading.percent(),
                    refresh.reading.mode(),
                    refresh.word.render().as_str()
                );
            }
            Err(e) => {
                if faulted_cycles == 0 {
                    warn!("Battery wiring fault (raw voltage {}), display held", e.raw);
                    WIRING_FAULT.signal(true);
                }
                faulted_cycles = faulted_cycles.saturating_add(1);
            }
        }

        ticker.next().await;
    }
}
