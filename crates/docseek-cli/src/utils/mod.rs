//! Shared helpers for the CLI commands.

pub mod logging;
