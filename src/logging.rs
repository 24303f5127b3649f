//! Logging setup for the command line tool.
//!
//! The library only emits records through the `log` facade; the binary calls
//! [`init`] once at startup to route them to stderr.
//!
//! ```no_run
//! crisp_dm::logging::init(false).expect("Failed to initialize logging");
//! log::info!("ready");
//! ```

use crate::error::{Result, SummaryError};
use env_logger::Env;

/// Installs the stderr logger.
///
/// The level defaults to `info`, or `debug` when `verbose` is set. `RUST_LOG`
/// overrides both.
///
/// # Errors
///
/// Returns an error if a logger was already installed.
pub fn init(verbose: bool) -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format_timestamp_millis()
        .format_target(true)
        .try_init()
        .map_err(|e| SummaryError::Config(format!("Failed to initialize logging: {e}")))
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}
