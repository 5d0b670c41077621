//! Configuration system for the nibble memory simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! session. It provides:
//! 1. **Defaults:** Startup cycle counts and memory geometry.
//! 2. **Structures:** Hierarchical config for general, driver, and device settings.
//! 3. **Loading:** JSON decoding from a string or a file path.
//!
//! Configuration never alters the line protocol; it only shapes startup
//! sequencing, the behavioral model, and logging. Use `Config::default()` when
//! no file is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::MAX_DEPTH;
use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Clock cycles applied while reset is held.
    pub const RESET_CYCLES: u32 = constants::RESET_CYCLES;

    /// Clock cycles applied after reset is released.
    pub const RELEASE_CYCLES: u32 = constants::RELEASE_CYCLES;

    /// Nibble memory depth (64 cells, 6-bit address).
    pub const DEPTH: usize = constants::DEFAULT_DEPTH;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use nibblesim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.driver.reset_cycles, 2);
/// assert_eq!(config.device.depth, 64);
/// ```
///
/// Deserializing a partial JSON document; omitted fields keep their defaults:
///
/// ```
/// use nibblesim_core::config::Config;
///
/// let config = Config::from_json(r#"{ "device": { "depth": 16 } }"#).unwrap();
/// assert_eq!(config.device.depth, 16);
/// assert_eq!(config.driver.release_cycles, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// General session settings.
    pub general: GeneralConfig,
    /// Startup sequencing of the cycle driver.
    pub driver: DriverConfig,
    /// Behavioral model parameters.
    pub device: DeviceConfig,
}

impl Config {
    /// Decodes a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` for malformed JSON or unknown fields, and
    /// `SimError::InvalidDepth` if the decoded depth is out of range.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and decodes a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if the file cannot be read, plus every
    /// error of [`Config::from_json`].
    pub fn from_file(path: &Path) -> Result<Self, SimError> {
        let text = fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidDepth` when `device.depth` is zero or above
    /// `MAX_DEPTH`.
    pub fn validate(&self) -> Result<(), SimError> {
        let depth = self.device.depth;
        if !(1..=MAX_DEPTH).contains(&depth) {
            return Err(SimError::InvalidDepth(depth));
        }
        Ok(())
    }
}

/// General session settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Log the driver statistics at `info` level when the session ends.
    #[serde(default = "GeneralConfig::default_log_summary")]
    pub log_summary: bool,
}

impl GeneralConfig {
    /// Summary logging is on unless disabled.
    const fn default_log_summary() -> bool {
        true
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_summary: Self::default_log_summary(),
        }
    }
}

/// Startup sequencing of the cycle driver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverConfig {
    /// Cycles clocked with reset asserted before release.
    #[serde(default = "DriverConfig::default_reset_cycles")]
    pub reset_cycles: u32,

    /// Cycles clocked after reset is released, before the first command.
    #[serde(default = "DriverConfig::default_release_cycles")]
    pub release_cycles: u32,
}

impl DriverConfig {
    /// Returns the default number of cycles held in reset.
    const fn default_reset_cycles() -> u32 {
        defaults::RESET_CYCLES
    }

    /// Returns the default number of cycles after release.
    const fn default_release_cycles() -> u32 {
        defaults::RELEASE_CYCLES
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            reset_cycles: defaults::RESET_CYCLES,
            release_cycles: defaults::RELEASE_CYCLES,
        }
    }
}

/// Behavioral nibble memory parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceConfig {
    /// Number of nibble cells; the address wraps modulo this value.
    #[serde(default = "DeviceConfig::default_depth")]
    pub depth: usize,
}

impl DeviceConfig {
    /// Returns the default memory depth.
    const fn default_depth() -> usize {
        defaults::DEPTH
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            depth: defaults::DEPTH,
        }
    }
}
