//! Fetch command implementation

use anyhow::{Context, Result};
use docseek_core::config::Settings;
use docseek_core::{DocsRetriever, UrlResolver};
use std::process::ExitCode;
use tracing::debug;

use super::print_json;

/// Execute the fetch command
///
/// Exits non-zero when no candidate URL produced documentation.
pub async fn execute(query: &str, base_url: Option<&str>, settings: &Settings) -> Result<ExitCode> {
    let mut retriever =
        DocsRetriever::from_settings(settings).context("Failed to create HTTP client")?;
    if let Some(host) = base_url {
        debug!(%host, "Using documentation host override");
        retriever = retriever.with_resolver(UrlResolver::parse_host(host)?);
    }

    let result = retriever.retrieve(query).await;
    print_json(&result)?;

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
