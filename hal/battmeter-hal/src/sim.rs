//! Simulated registers
//!
//! Plain-memory stand-ins for the meter's registers. They count accesses
//! so tests can check how often the hardware was touched.

use core::cell::Cell;

use crate::register::{InputRegister, OutputRegister};

/// Simulated input register holding a fixed value
#[derive(Debug, Default)]
pub struct SimInput {
    value: Cell<i32>,
    reads: Cell<u32>,
}

impl SimInput {
    /// Create an input register that reads `value`
    pub const fn new(value: i32) -> Self {
        Self {
            value: Cell::new(value),
            reads: Cell::new(0),
        }
    }

    /// Change the value the sensor side presents
    pub fn set(&self, value: i32) {
        self.value.set(value);
    }

    /// Number of reads performed so far
    pub fn reads(&self) -> u32 {
        self.reads.get()
    }
}

impl InputRegister for SimInput {
    fn read(&self) -> i32 {
        self.reads.set(self.reads.get().saturating_add(1));
        self.value.get()
    }
}

/// Simulated output register
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimOutput {
    value: u32,
    writes: u32,
}

impl SimOutput {
    /// Create an output register with power-on contents `value`
    pub const fn new(value: u32) -> Self {
        Self { value, writes: 0 }
    }

    /// Current register contents
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Number of writes performed so far
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl OutputRegister for SimOutput {
    fn write(&mut self, value: u32) {
        self.value = value;
        self.writes = self.writes.saturating_add(1);
    }
}
