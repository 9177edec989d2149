//! Configuration type definitions
//!
//! The firmware's `meter.toml` is checked at build time and turned into a
//! [`MeterConfig`] constant. [`MeterConfig::validate`] repeats the checks
//! that matter at runtime.

/// Register width in bytes; register addresses must be aligned to it
pub const REGISTER_ALIGN: u32 = 4;

/// Default refresh period
pub const DEFAULT_REFRESH_MS: u32 = 500;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Register address is not word aligned
    MisalignedRegister(u32),
    /// Two registers share an address
    DuplicateRegister(u32),
    /// Refresh period of zero
    ZeroRefreshInterval,
}

/// Addresses of the meter's memory-mapped registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterMap {
    /// Voltage input (millivolts x2, negative on wiring fault)
    pub voltage: u32,
    /// Status input (bit 4 = charging)
    pub status: u32,
    /// Display output
    pub display: u32,
}

impl RegisterMap {
    /// Check alignment and that no two registers alias
    pub fn validate(&self) -> Result<(), ConfigError> {
        let addresses = [self.voltage, self.status, self.display];

        for &address in &addresses {
            if address % REGISTER_ALIGN != 0 {
                return Err(ConfigError::MisalignedRegister(address));
            }
        }

        for (i, &a) in addresses.iter().enumerate() {
            if addresses[i + 1..].contains(&a) {
                return Err(ConfigError::DuplicateRegister(a));
            }
        }

        Ok(())
    }
}

/// Meter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeterConfig {
    /// Register addresses
    pub registers: RegisterMap,
    /// Time between refresh cycles in milliseconds
    pub refresh_interval_ms: u32,
}

impl MeterConfig {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.registers.validate()?;

        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::ZeroRefreshInterval);
        }

        Ok(())
    }
}
