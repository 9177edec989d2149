//! Board-agnostic core logic for the battery meter
//!
//! This crate contains everything that does not depend on a specific board:
//!
//! - Battery reader (voltage/status registers to a [`BatteryReading`])
//! - Display encoder (reading to a packed seven-segment [`DisplayWord`])
//! - Update orchestrator ([`BatteryMeter`], one refresh per call)
//! - Configuration type definitions
//!
//! All arithmetic is integer-only and nothing allocates.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod battery;
pub mod config;
pub mod display;
pub mod meter;

pub use battery::{read_battery, BatteryReading, DisplayMode, WiringError};
pub use config::{ConfigError, MeterConfig, RegisterMap};
pub use display::{encode, DigitPosition, DisplayWord};
pub use meter::{BatteryMeter, Refresh};
