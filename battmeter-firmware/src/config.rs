//! Build-time meter configuration
//!
//! `METER_CONFIG` is generated by build.rs from meter.toml.

use battmeter_core::{MeterConfig, RegisterMap};

include!(concat!(env!("OUT_DIR"), "/meter_config.rs"));
