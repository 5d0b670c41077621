//! Session statistics collection and reporting.
//!
//! This module tracks what a driver session did. It provides:
//! 1. **Cycles:** Clock cycles advanced, including the startup reset sequence.
//! 2. **Lines:** Well-formed step lines applied and malformed lines skipped.
//! 3. **Reporting:** A one-line `Display` summary and a structured log event.

use std::fmt;

use tracing::info;

/// Counters kept by the cycle driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverStats {
    /// Total clock cycles applied to the device.
    pub cycles: u64,
    /// Step lines applied (each advances exactly one cycle).
    pub steps: u64,
    /// Malformed lines answered without advancing the clock.
    pub malformed: u64,
}

impl DriverStats {
    /// Lines answered with a status report, malformed or not.
    pub const fn reports(&self) -> u64 {
        self.steps + self.malformed
    }

    /// Emits the counters as a single `info` event.
    pub fn log(&self, device: &str) {
        info!(
            device,
            cycles = self.cycles,
            steps = self.steps,
            malformed = self.malformed,
            "session finished"
        );
    }
}

impl fmt::Display for DriverStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cycles={} steps={} malformed={}",
            self.cycles, self.steps, self.malformed
        )
    }
}
