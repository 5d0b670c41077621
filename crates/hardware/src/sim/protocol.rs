//! Line protocol codec.
//!
//! Each input line is one request:
//!
//! ```text
//! <hex-data> <store> <next> <prev> <reset>
//! quit | exit
//! ```
//!
//! The data token is hexadecimal (an optional `0x` prefix is accepted) and is
//! masked to its low nibble. The four flags are decimal integers where any
//! nonzero value is true. Every processed line is answered with one status
//! line, `<addr-hex> <dout-hex>`, in lowercase hex with no prefix or padding.

use std::fmt;
use std::str::FromStr;

use crate::common::constants::{DATA_MASK, QUIT_COMMANDS};
use crate::common::error::ParseError;

/// Pin assignments requested by a single step line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandLine {
    /// Value for `din`, already masked to four bits.
    pub data: u8,
    /// Assert the store pulse for this cycle.
    pub store: bool,
    /// Assert the next pulse for this cycle.
    pub next: bool,
    /// Assert the prev pulse for this cycle.
    pub prev: bool,
    /// Hold the device in reset from this cycle on.
    pub reset: bool,
}

impl CommandLine {
    /// A step line that only clocks the device, with `data` on `din`.
    pub const fn idle(data: u8) -> Self {
        Self {
            data: data & DATA_MASK,
            store: false,
            next: false,
            prev: false,
            reset: false,
        }
    }
}

impl fmt::Display for CommandLine {
    /// Renders the line in wire format, the inverse of [`parse_line`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:X} {} {} {} {}",
            self.data,
            u8::from(self.store),
            u8::from(self.next),
            u8::from(self.prev),
            u8::from(self.reset)
        )
    }
}

/// A classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Apply the pins and advance one clock cycle.
    Step(CommandLine),
    /// End the session without a status line.
    Quit,
}

impl FromStr for Request {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_line(line)
    }
}

/// Snapshot of the device outputs after a step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Status {
    /// Value of the `addr` output.
    pub addr: u32,
    /// Value of the `dout` output.
    pub dout: u8,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x} {:x}", self.addr, self.dout)
    }
}

/// Classifies one input line.
///
/// # Errors
///
/// Returns a [`ParseError`] when the line is neither a control command nor
/// exactly five valid tokens.
pub fn parse_line(line: &str) -> Result<Request, ParseError> {
    let trimmed = line.trim();
    if QUIT_COMMANDS.contains(&trimmed) {
        return Ok(Request::Quit);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Err(ParseError::Empty),
        [data, store, next, prev, reset] => Ok(Request::Step(CommandLine {
            data: parse_data(data)?,
            store: parse_flag("store", store)?,
            next: parse_flag("next", next)?,
            prev: parse_flag("prev", prev)?,
            reset: parse_flag("reset", reset)?,
        })),
        other => Err(ParseError::TokenCount { found: other.len() }),
    }
}

/// Parses the hex data token and keeps its low nibble.
fn parse_data(token: &str) -> Result<u8, ParseError> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16)
        .map(|value| (value & u32::from(DATA_MASK)) as u8)
        .map_err(|_| ParseError::InvalidData(token.to_string()))
}

/// Parses a decimal flag token; any nonzero value asserts the pin.
fn parse_flag(name: &'static str, token: &str) -> Result<bool, ParseError> {
    token
        .parse::<i32>()
        .map(|value| value != 0)
        .map_err(|_| ParseError::InvalidFlag {
            name,
            token: token.to_string(),
        })
}
