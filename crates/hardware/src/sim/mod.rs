//! Simulation harness: the line protocol and the cycle driver.
//!
//! Provides the codec for the text protocol spoken over stdin/stdout and the
//! driver that turns each request into pin assignments and one clock cycle.

pub mod driver;
pub mod protocol;

pub use driver::{CycleDriver, LineOutcome, run_session};
pub use protocol::{CommandLine, Request, Status, parse_line};
