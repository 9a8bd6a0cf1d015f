//! Config command implementation

use anyhow::Result;
use docseek_core::config::{EnvLayer, LayeredEnv};
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use super::print_json;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigReport<'a> {
    skill_dir: &'a Path,
    debug: bool,
    api_key_set: bool,
    layers: &'a [EnvLayer],
}

/// Execute the config command
///
/// The API key itself is never printed, only whether one is set.
pub fn execute(skill_dir: &Path, env: &LayeredEnv) -> Result<ExitCode> {
    let settings = env.settings();
    print_json(&ConfigReport {
        skill_dir,
        debug: settings.debug,
        api_key_set: settings.api_key.is_some(),
        layers: env.layers(),
    })?;
    Ok(ExitCode::SUCCESS)
}
