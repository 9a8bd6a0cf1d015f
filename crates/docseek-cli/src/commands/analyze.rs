//! Analyze command implementation

use anyhow::{Context, Result, bail};
use docseek_core::analyze;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use super::print_json;

/// Execute the analyze command on a manifest file, or stdin for `-`
pub fn execute(input: &Path) -> Result<ExitCode> {
    let content = read_input(input)?;
    print_json(&analyze(&content))?;
    Ok(ExitCode::SUCCESS)
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read manifest from stdin")?;
        return Ok(content);
    }

    if !input.exists() {
        bail!("File not found: {}", input.display());
    }

    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read manifest '{}'", input.display()))
}
