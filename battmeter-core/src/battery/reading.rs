//! Battery reading and voltage-to-percent conversion
//!
//! The conversion is integer-only and avoids division: the voltage port
//! is halved with a right shift, and the percent slope of 8 mV per percent
//! is another right shift.

use battmeter_hal::InputRegister;

/// Battery voltage that reads as 0% (millivolts)
pub const BASELINE_MV: u32 = 3000;

/// Percent slope as a shift: one percent per 8 mV above the baseline
pub const PERCENT_SHIFT: u32 = 3;

/// Status register bit set while charging or running on external power
pub const CHARGING_BIT: i32 = 1 << 4;

/// Upper clamp for the percentage
const MAX_PERCENT: i64 = 100;

/// Quantity shown on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Absolute battery voltage (shown while charging / on external power)
    Voltage,
    /// Remaining charge in percent
    Percent,
}

impl DisplayMode {
    /// Select the mode from a raw status register value
    ///
    /// Only [`CHARGING_BIT`] is inspected; all other bits are ignored.
    pub fn from_status(status: i32) -> Self {
        if status & CHARGING_BIT != 0 {
            DisplayMode::Voltage
        } else {
            DisplayMode::Percent
        }
    }
}

/// Voltage register reported a negative value
///
/// The sensor is connected with reversed polarity or is otherwise out of
/// range. No reading is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WiringError {
    /// Raw voltage register value that triggered the fault
    pub raw: i32,
}

/// One sample of the battery sensor
///
/// `percent` is always derived from `millivolts` by
/// [`percent_from_millivolts`]; the fields are private so that cannot be
/// broken after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryReading {
    millivolts: u32,
    percent: u8,
    mode: DisplayMode,
}

impl BatteryReading {
    /// Build a reading from a voltage in millivolts
    pub fn from_millivolts(millivolts: u32, mode: DisplayMode) -> Self {
        Self {
            millivolts,
            percent: percent_from_millivolts(millivolts),
            mode,
        }
    }

    /// Build a reading from raw register values
    pub fn from_raw(voltage_raw: i32, status_raw: i32) -> Result<Self, WiringError> {
        let millivolts = millivolts_from_raw(voltage_raw)?;
        Ok(Self::from_millivolts(
            millivolts,
            DisplayMode::from_status(status_raw),
        ))
    }

    /// Battery voltage in millivolts
    pub fn millivolts(&self) -> u32 {
        self.millivolts
    }

    /// Remaining charge, 0-100
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Quantity to display
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }
}

/// The voltage port reports millivolts at double scale
fn millivolts_from_raw(raw: i32) -> Result<u32, WiringError> {
    if raw < 0 {
        return Err(WiringError { raw });
    }
    Ok((raw >> 1) as u32)
}

/// Convert millivolts to a clamped percentage
///
/// `(mv - 3000) >> 3`, clamped to 0..=100. Below the baseline the
/// arithmetic shift floors toward negative infinity (2999 mV gives -1,
/// not 0) before the clamp.
pub fn percent_from_millivolts(millivolts: u32) -> u8 {
    let raw = (i64::from(millivolts) - i64::from(BASELINE_MV)) >> PERCENT_SHIFT;
    raw.clamp(0, MAX_PERCENT) as u8
}

/// Sample the voltage and status registers
///
/// The voltage register is read first; on a wiring fault the status
/// register is not touched and no reading is produced.
pub fn read_battery<V, S>(voltage: &V, status: &S) -> Result<BatteryReading, WiringError>
where
    V: InputRegister,
    S: InputRegister,
{
    let millivolts = millivolts_from_raw(voltage.read())?;
    let mode = DisplayMode::from_status(status.read());
    Ok(BatteryReading::from_millivolts(millivolts, mode))
}
