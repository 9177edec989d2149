//! Update orchestrator
//!
//! One call to [`BatteryMeter::update`] is one refresh cycle: read both
//! input registers, encode, write the display register. A wiring fault
//! leaves the display untouched.

use battmeter_hal::{InputRegister, OutputRegister};

use crate::battery::{read_battery, BatteryReading, WiringError};
use crate::display::{encode, DisplayWord};

/// Outcome of a successful refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Refresh {
    /// Reading the display was computed from
    pub reading: BatteryReading,
    /// Word written to the display register
    pub word: DisplayWord,
}

/// Battery meter bound to its three registers
///
/// Holds no state besides the register handles; every refresh starts
/// from a fresh sample.
pub struct BatteryMeter<V, S, D> {
    voltage: V,
    status: S,
    display: D,
}

impl<V, S, D> BatteryMeter<V, S, D>
where
    V: InputRegister,
    S: InputRegister,
    D: OutputRegister,
{
    /// Bind the meter to its voltage, status and display registers
    pub fn new(voltage: V, status: S, display: D) -> Self {
        Self {
            voltage,
            status,
            display,
        }
    }

    /// Run one refresh cycle
    pub fn update(&mut self) -> Result<(), WiringError> {
        self.refresh().map(|_| ())
    }

    /// Run one refresh cycle and report what was shown
    ///
    /// On error the display register is not written.
    pub fn refresh(&mut self) -> Result<Refresh, WiringError> {
        let reading = read_battery(&self.voltage, &self.status)?;
        let word = encode(reading);
        self.display.write(word.bits());
        Ok(Refresh { reading, word })
    }

    /// Borrow the display register handle
    pub fn display_port(&self) -> &D {
        &self.display
    }

    /// Give back the register handles
    pub fn release(self) -> (V, S, D) {
        (self.voltage, self.status, self.display)
    }
}
