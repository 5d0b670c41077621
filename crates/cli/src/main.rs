//! Nibble memory simulator CLI.
//!
//! This binary is the process a front panel spawns. It performs:
//! 1. **Setup:** Parse arguments, load an optional JSON config, install logging on stderr.
//! 2. **Session:** Reset the nibble memory and serve the line protocol on stdin/stdout.
//! 3. **Exit:** Status 0 on `quit`, `exit`, or end of input; status 1 on a fatal error.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use nibblesim_core::common::SimError;
use nibblesim_core::config::Config;
use nibblesim_core::sim::run_session;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Nibble memory cycle simulator",
    long_about = "Reset a simulated 64x4 nibble memory, then apply one clock cycle per input line.\n\nInput lines:  <hex-data> <store> <next> <prev> <reset>   (e.g. \"A 1 0 0 0\")\nOutput lines: <addr-hex> <dout-hex>\n\n`quit`, `exit`, or end of input end the session. Logs go to stderr; set RUST_LOG to filter."
)]
struct Cli {
    /// JSON configuration file (startup cycles, memory depth, logging).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of memory cells.
    #[arg(long)]
    depth: Option<usize>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Resolves the effective configuration: file (or defaults), then flag overrides.
    fn load_config(&self) -> Result<Config, SimError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(depth) = self.depth {
            config.device.depth = depth;
        }
        config.validate()?;
        Ok(config)
    }

    /// Default log directive when `RUST_LOG` is unset.
    const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Installs a stderr `fmt` subscriber; stdout is reserved for status lines.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(
        depth = config.device.depth,
        reset_cycles = config.driver.reset_cycles,
        release_cycles = config.driver.release_cycles,
        "configuration loaded"
    );

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    match run_session(&config, stdin, stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
