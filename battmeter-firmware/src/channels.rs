//! Inter-task communication channels

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Wiring fault state (updated by the meter task on every change)
/// True while the voltage register reports a wiring fault
pub static WIRING_FAULT: Signal<CriticalSectionRawMutex, bool> = Signal::new();
