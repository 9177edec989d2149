//! Register abstractions
//!
//! A register is a single machine word. Input registers are sampled,
//! output registers are overwritten; neither carries any other protocol.

/// Read-only word register
///
/// Reading must not change device state. Implementations for memory-mapped
/// hardware should use volatile loads.
pub trait InputRegister {
    /// Sample the current register value
    fn read(&self) -> i32;

    /// Check whether a bit (or any bit of a mask) is set
    fn is_set(&self, mask: i32) -> bool {
        self.read() & mask != 0
    }
}

/// Write-only word register
///
/// Every write replaces all bits of the register. Implementations for
/// memory-mapped hardware should use volatile stores.
pub trait OutputRegister {
    /// Overwrite the register with `value`
    fn write(&mut self, value: u32);
}

impl<T: InputRegister + ?Sized> InputRegister for &T {
    fn read(&self) -> i32 {
        (**self).read()
    }
}

impl<T: OutputRegister + ?Sized> OutputRegister for &mut T {
    fn write(&mut self, value: u32) {
        (**self).write(value)
    }
}
