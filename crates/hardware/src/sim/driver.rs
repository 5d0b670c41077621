//! Cycle driver: owns the device and runs the line protocol.
//!
//! The driver is the only code that touches the device pins. It performs:
//! 1. **Startup:** Hold reset for a few cycles, release it, clock once more.
//! 2. **Stepping:** Apply one command line's pins, clock once, clear the pulses.
//! 3. **Session:** Read lines, answer each with a status line, stop on
//!    `quit`/`exit` or end of input.

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::common::constants::DATA_MASK;
use crate::common::error::SimError;
use crate::config::{Config, DriverConfig};
use crate::device::{Device, NibbleMem};
use crate::sim::protocol::{self, CommandLine, Request, Status};
use crate::stats::DriverStats;

/// Result of handling one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// A status line must be emitted.
    Report(Status),
    /// The session ends; nothing is emitted.
    Quit,
}

/// Drives a [`Device`] one clock cycle per command line.
#[derive(Debug)]
pub struct CycleDriver<D: Device> {
    device: D,
    stats: DriverStats,
}

impl<D: Device> CycleDriver<D> {
    /// Takes ownership of `device` and runs the startup reset sequence.
    ///
    /// All inputs are driven low with reset asserted, `reset_cycles` cycles
    /// are clocked, reset is released, and `release_cycles` more cycles are
    /// clocked. The returned driver is ready for the first command.
    pub fn new(device: D, config: &DriverConfig) -> Self {
        let mut driver = Self {
            device,
            stats: DriverStats::default(),
        };

        driver.device.set_rst_n(false);
        driver.device.set_din(0);
        driver.device.set_store(false);
        driver.device.set_next(false);
        driver.device.set_prev(false);

        for _ in 0..config.reset_cycles {
            driver.tick();
        }

        driver.device.set_rst_n(true);
        for _ in 0..config.release_cycles {
            driver.tick();
        }

        debug!(
            device = driver.device.name(),
            cycles = driver.stats.cycles,
            "startup complete"
        );
        driver
    }

    /// Advances one clock cycle: `clk` low, high, low, evaluating after each.
    ///
    /// Leaves the clock low so the next cycle starts from a known level.
    pub fn tick(&mut self) {
        self.device.set_clk(false);
        self.device.eval();
        self.device.set_clk(true);
        self.device.eval();
        self.device.set_clk(false);
        self.device.eval();
        self.stats.cycles += 1;
    }

    /// Applies `command` for exactly one cycle and returns the new outputs.
    ///
    /// The store/next/prev pulses are cleared after the cycle. Reset is a
    /// level and stays where `command` left it.
    pub fn step(&mut self, command: &CommandLine) -> Status {
        self.device.set_rst_n(!command.reset);
        self.device.set_din(command.data & DATA_MASK);
        self.device.set_store(command.store);
        self.device.set_next(command.next);
        self.device.set_prev(command.prev);

        self.tick();

        self.device.set_store(false);
        self.device.set_next(false);
        self.device.set_prev(false);

        self.stats.steps += 1;
        let status = self.status();
        trace!(%command, %status, "step");
        status
    }

    /// Current device outputs.
    pub fn status(&self) -> Status {
        Status {
            addr: self.device.addr(),
            dout: self.device.dout(),
        }
    }

    /// Handles one raw input line.
    ///
    /// Malformed lines leave every pin untouched, advance no cycle, and still
    /// report the current outputs.
    pub fn handle_line(&mut self, line: &str) -> LineOutcome {
        match protocol::parse_line(line) {
            Ok(Request::Quit) => LineOutcome::Quit,
            Ok(Request::Step(command)) => LineOutcome::Report(self.step(&command)),
            Err(err) => {
                self.stats.malformed += 1;
                debug!(%err, line = line.trim_end(), "malformed command line");
                LineOutcome::Report(self.status())
            }
        }
    }

    /// Runs the command loop until `quit`, `exit`, or end of input.
    ///
    /// Every status line is flushed as soon as it is written so a driving
    /// process sees exactly one response per request.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Io` if reading `input` or writing `output` fails.
    /// Bytes that are not UTF-8 are not an error; the line is malformed.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<DriverStats, SimError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                break;
            }
            // Undecodable bytes never parse, so such a line is just malformed.
            let line = String::from_utf8_lossy(&buf);
            match self.handle_line(&line) {
                LineOutcome::Quit => {
                    debug!(command = line.trim(), "quit requested");
                    break;
                }
                LineOutcome::Report(status) => {
                    writeln!(output, "{status}")?;
                    output.flush()?;
                }
            }
        }
        Ok(self.stats)
    }

    /// Counters accumulated so far.
    pub const fn stats(&self) -> DriverStats {
        self.stats
    }

    /// Shared access to the owned device.
    pub const fn device(&self) -> &D {
        &self.device
    }

    /// Releases the device.
    pub fn into_device(self) -> D {
        self.device
    }
}

/// Builds a nibble memory from `config`, resets it, and serves one session.
///
/// # Errors
///
/// Returns `SimError::InvalidDepth` for an out-of-range memory depth and
/// `SimError::Io` for read or write failures.
pub fn run_session<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: W,
) -> Result<DriverStats, SimError> {
    let device = NibbleMem::new(config.device.depth)?;
    let mut driver = CycleDriver::new(device, &config.driver);
    let stats = driver.run(input, output)?;
    if config.general.log_summary {
        stats.log(driver.device().name());
    }
    Ok(stats)
}
