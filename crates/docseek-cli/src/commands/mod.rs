//! Command implementations for the docseek CLI
//!
//! Each command lives in its own submodule, prints JSON on stdout and
//! returns the process exit code.

mod analyze;
mod config;
mod detect;
mod fetch;

pub use analyze::execute as analyze;
pub use config::execute as show_config;
pub use detect::execute as detect;
pub use fetch::execute as fetch;

use anyhow::Result;
use serde::Serialize;

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
