//! Battery meter hardware abstraction layer
//!
//! The meter talks to its hardware through three word-sized registers:
//! two inputs (voltage, status) and one output (display). This crate
//! defines the register capability traits so the meter logic can run
//! against memory-mapped registers on target and simulated ones on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  battmeter-firmware (MMIO registers)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  battmeter-core (reader, encoder, ...)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  battmeter-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`register::InputRegister`] - Read-only word register
//! - [`register::OutputRegister`] - Write-only word register

#![no_std]
#![deny(unsafe_code)]

pub mod register;

#[cfg(any(test, feature = "sim"))]
pub mod sim;

pub use register::{InputRegister, OutputRegister};
