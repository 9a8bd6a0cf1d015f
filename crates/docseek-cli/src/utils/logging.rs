//! Logging initialization.
//!
//! stdout carries the JSON result of every command, so the subscriber always
//! writes to stderr.
//!
//! Configuration discovery runs before the `DEBUG` key is known, so it logs
//! through a scoped subscriber built from the CLI flags alone
//! ([`with_flag_logging`]). The global subscriber installed afterwards also
//! honors the key.

use anyhow::Result;
use tracing::{Level, Subscriber};
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;

/// Pick the log level: explicit flags first, then the configured `DEBUG` key.
pub const fn log_level(verbose: bool, quiet: bool, debug_setting: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else if debug_setting {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

fn build_subscriber(level: Level) -> impl Subscriber + Send + Sync + 'static {
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish()
}

/// Run `f` with a subscriber chosen from the CLI flags only.
pub fn with_flag_logging<T>(cli: &Cli, f: impl FnOnce() -> T) -> T {
    let subscriber = build_subscriber(log_level(cli.verbose, cli.quiet, false));
    tracing::subscriber::with_default(subscriber, f)
}

/// Initialize the logging subsystem based on CLI flags and settings.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli, debug_setting: bool) -> Result<()> {
    let subscriber = build_subscriber(log_level(cli.verbose, cli.quiet, debug_setting));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
