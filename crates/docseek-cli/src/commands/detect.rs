//! Detect command implementation

use anyhow::Result;
use docseek_core::classify;
use serde_json::json;
use std::process::ExitCode;

use super::print_json;

/// Execute the detect command
///
/// Prints the [`docseek_core::TopicMatch`] for topic questions and
/// `{"isTopicSpecific": false}` for everything else.
pub fn execute(query: &str) -> Result<ExitCode> {
    match classify(query) {
        Some(hit) => print_json(&hit)?,
        None => print_json(&json!({ "isTopicSpecific": false }))?,
    }
    Ok(ExitCode::SUCCESS)
}
