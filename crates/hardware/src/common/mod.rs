//! Common types shared by the device model, protocol, and driver.
//!
//! This module provides:
//! 1. **Constants:** Pin widths, memory geometry, and startup cycle counts.
//! 2. **Error Handling:** Protocol parse errors and fatal simulator errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for the line protocol and the simulator session.
pub mod error;

pub use constants::{DATA_MASK, DEFAULT_DEPTH};
pub use error::{ParseError, SimError};
