//! Memory-mapped meter registers
//!
//! The sensor front end publishes the voltage and status words into the
//! SRAM5 scratch bank and scans the display word out of it. Addresses come
//! from meter.toml.

use battmeter_core::BatteryMeter;
use battmeter_hal::{InputRegister, OutputRegister};

/// Meter bound to the board's memory-mapped registers
pub type BoardMeter = BatteryMeter<MmioInput, MmioInput, MmioOutput>;

/// Read-only memory-mapped word
pub struct MmioInput {
    addr: *const i32,
}

impl MmioInput {
    /// # Safety
    ///
    /// `addr` must be a word-aligned address that stays valid for volatile
    /// reads for the life of the program.
    pub const unsafe fn new(addr: u32) -> Self {
        Self {
            addr: addr as usize as *const i32,
        }
    }
}

impl InputRegister for MmioInput {
    fn read(&self) -> i32 {
        // SAFETY: validity guaranteed by the caller of `new`
        unsafe { core::ptr::read_volatile(self.addr) }
    }
}

// SAFETY: the handle is only a fixed address; access is volatile
unsafe impl Send for MmioInput {}

/// Write-only memory-mapped word
pub struct MmioOutput {
    addr: *mut u32,
}

impl MmioOutput {
    /// # Safety
    ///
    /// `addr` must be a word-aligned address that stays valid for volatile
    /// writes for the life of the program, and no other handle may write it.
    pub const unsafe fn new(addr: u32) -> Self {
        Self {
            addr: addr as usize as *mut u32,
        }
    }
}

impl OutputRegister for MmioOutput {
    fn write(&mut self, value: u32) {
        // SAFETY: validity and exclusivity guaranteed by the caller of `new`
        unsafe { core::ptr::write_volatile(self.addr, value) }
    }
}

// SAFETY: the handle is only a fixed address; access is volatile
unsafe impl Send for MmioOutput {}
