//! Nibble memory simulator library.
//!
//! This crate implements a command-driven harness for a clocked 64 x 4 bit
//! memory device with the following:
//! 1. **Device:** The pin-level `Device` trait and the `NibbleMem` behavioral model.
//! 2. **Protocol:** Parsing of `<hex-data> <store> <next> <prev> <reset>` lines
//!    and formatting of `<addr> <dout>` status lines.
//! 3. **Driver:** Startup reset sequencing, one clock cycle per line, pulse clearing.
//! 4. **Simulation:** Configuration, session statistics, and error types.

/// Common types and constants (pin widths, errors).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// Simulated devices (pin contract and behavioral models).
pub mod device;
/// Line protocol and cycle driver.
pub mod sim;
/// Session statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Pin-level device contract driven by the harness.
pub use crate::device::Device;
/// Behavioral nibble memory model.
pub use crate::device::NibbleMem;
/// Cycle driver that owns a device and serves the line protocol.
pub use crate::sim::CycleDriver;
