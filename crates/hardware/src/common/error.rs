//! Protocol and Simulator Error definitions.
//!
//! This module defines the two error families of the harness:
//! 1. **Parse Errors:** A malformed command line. Recovered locally by the driver,
//!    which skips the cycle and reports the unchanged state.
//! 2. **Simulator Errors:** Configuration and I/O failures that end the session.

use thiserror::Error;

/// Reasons a command line could not be turned into a step request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line contained no tokens.
    #[error("empty command line")]
    Empty,

    /// The line did not contain exactly five tokens.
    #[error("expected 5 tokens, found {found}")]
    TokenCount {
        /// Number of whitespace-separated tokens found.
        found: usize,
    },

    /// The data token is not a hexadecimal value that fits in 32 bits.
    #[error("invalid hex data value `{0}`")]
    InvalidData(String),

    /// A control flag token is not a decimal integer.
    #[error("invalid {name} flag `{token}`")]
    InvalidFlag {
        /// Pin the flag drives (`store`, `next`, `prev`, `reset`).
        name: &'static str,
        /// The offending token.
        token: String,
    },
}

/// Fatal errors that terminate a simulator session.
#[derive(Debug, Error)]
pub enum SimError {
    /// Reading commands or writing status lines failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be read or decoded.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The nibble memory depth is zero or beyond the addressable range.
    #[error("invalid memory depth {0}: must be between 1 and {max}", max = crate::common::constants::MAX_DEPTH)]
    InvalidDepth(usize),
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
