#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{docseek_in, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn config_reports_layers_without_leaking_key() -> Result<()> {
    let root = tempdir()?;
    let skill = root.path().join("claude").join("skills").join("seeker");
    std::fs::create_dir_all(&skill)?;
    std::fs::write(root.path().join("claude").join(".env"), "DEBUG=true\n")?;
    std::fs::write(skill.join(".env"), "CONTEXT7_API_KEY=super-secret\n")?;

    let output = docseek_in(&skill)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("super-secret").not())
        .get_output()
        .clone();

    let json = stdout_json(&output);
    assert_eq!(json["debug"], true);
    assert_eq!(json["apiKeySet"], true);

    let loaded: Vec<bool> = json["layers"]
        .as_array()
        .map(|layers| layers.iter().map(|l| l["loaded"] == true).collect())
        .unwrap_or_default();
    assert_eq!(loaded, vec![true, false, true, true]);
    assert_eq!(json["layers"][3]["scope"], "process");
    Ok(())
}

#[test]
fn process_env_overrides_files() -> Result<()> {
    let skill = tempdir()?;
    std::fs::write(skill.path().join(".env"), "DEBUG=true\n")?;

    let output = docseek_in(skill.path())
        .env("DEBUG", "false")
        .arg("config")
        .assert()
        .success()
        .get_output()
        .clone();

    assert_eq!(stdout_json(&output)["debug"], false);
    Ok(())
}

#[test]
fn verbose_logs_skipped_env_lines() -> Result<()> {
    let skill = tempdir()?;
    std::fs::write(skill.path().join(".env"), "this is not valid\nDEBUG=true\n")?;

    let output = docseek_in(skill.path())
        .args(["--verbose", "config"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping malformed env line"))
        .get_output()
        .clone();

    assert_eq!(stdout_json(&output)["debug"], true);
    Ok(())
}

#[test]
fn missing_skill_dir_is_an_error() -> Result<()> {
    let root = tempdir()?;

    docseek_in(&root.path().join("missing"))
        .arg("config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
    Ok(())
}
