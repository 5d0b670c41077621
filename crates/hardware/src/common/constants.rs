//! Global Simulator Constants.
//!
//! This module defines constants used across the simulator. It includes:
//! 1. **Pin Constants:** Data-in/data-out width and masks.
//! 2. **Memory Constants:** Default nibble memory depth.
//! 3. **Startup Constants:** Clock cycles applied during reset sequencing.

/// Width of the data-in and data-out pins in bits.
pub const DATA_BITS: u32 = 4;

/// Mask applied to every data value before it reaches the `din` pin.
pub const DATA_MASK: u8 = 0xF;

/// Default number of nibble cells in the memory (6-bit address space).
pub const DEFAULT_DEPTH: usize = 64;

/// Largest supported memory depth (16-bit address space).
pub const MAX_DEPTH: usize = 1 << 16;

/// Clock cycles applied while reset is held during startup.
pub const RESET_CYCLES: u32 = 2;

/// Clock cycles applied after reset is released during startup.
pub const RELEASE_CYCLES: u32 = 1;

/// Control commands that end a session without a status line.
pub const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];
