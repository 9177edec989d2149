//! Battery meter firmware
//!
//! Reads the battery sensor registers, renders volts or percent on the
//! seven-segment display with a five-bar level gauge, and blinks the
//! status LED while the sensor is miswired.
//!
//! Build for the RP2040 target:
//!
//! ```text
//! cargo build -p battmeter-firmware --target thumbv6m-none-eabi --release
//! ```

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use {defmt_rtt as _, panic_probe as _};

use crate::board::{MmioInput, MmioOutput};
use crate::config::METER_CONFIG;

use battmeter_core::BatteryMeter;

mod board;
mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Battery meter firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // On-board LED (GPIO25) doubles as the wiring fault indicator
    let led = Output::new(p.PIN_25, Level::Low);
    spawner.spawn(tasks::status_led_task(led)).unwrap();

    if let Err(e) = METER_CONFIG.validate() {
        error!("Invalid meter configuration: {:?}", e);
        return;
    }

    let registers = METER_CONFIG.registers;
    info!(
        "Registers: voltage={=u32:#x} status={=u32:#x} display={=u32:#x}",
        registers.voltage, registers.status, registers.display
    );

    // SAFETY: addresses were validated above and lie in SRAM5, which
    // memory.x keeps out of the linker's RAM region. The meter task is
    // the only owner of the display register.
    let meter = unsafe {
        BatteryMeter::new(
            MmioInput::new(registers.voltage),
            MmioInput::new(registers.status),
            MmioOutput::new(registers.display),
        )
    };

    spawner
        .spawn(tasks::meter_task(meter, METER_CONFIG.refresh_interval_ms))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
