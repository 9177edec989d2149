//! Battery reader
//!
//! Turns the raw voltage and status registers into a [`BatteryReading`].

pub mod reading;

pub use reading::{
    percent_from_millivolts, read_battery, BatteryReading, DisplayMode, WiringError, BASELINE_MV,
    CHARGING_BIT, PERCENT_SHIFT,
};
