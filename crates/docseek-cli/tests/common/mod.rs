#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::time::Duration;

pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a `docseek` command isolated from the caller's configuration.
pub fn docseek_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docseek"));
    cmd.timeout(CMD_TIMEOUT);
    for key in ["DEBUG", "CONTEXT7_API_KEY", "DOCSEEK_BASE_URL", "DOCSEEK_SKILL_DIR"] {
        cmd.env_remove(key);
    }
    cmd
}

/// `docseek_cmd` reading its `.env` layers from `skill_dir`.
#[allow(dead_code)]
pub fn docseek_in(skill_dir: &Path) -> Command {
    let mut cmd = docseek_cmd();
    cmd.env("DOCSEEK_SKILL_DIR", skill_dir);
    cmd
}

/// Parse a command's stdout as JSON.
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
