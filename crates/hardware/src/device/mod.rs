//! Simulated devices driven by the cycle driver.
//!
//! This module contains the pin-level device contract and the behavioral
//! models that implement it:
//! 1. **Traits:** `Device`, the clock/reset/data/pulse pin set plus `eval`.
//! 2. **Models:** `NibbleMem`, a 64 x 4 bit memory with store/next/prev pulses.

/// Behavioral model of the nibble memory.
pub mod nibble_mem;

/// Pin contract shared by every simulated device.
pub mod traits;

pub use nibble_mem::NibbleMem;
pub use traits::Device;
