#![allow(missing_docs)]

mod common;

use common::{docseek_cmd, stdout_json};
use predicates::prelude::*;

#[test]
fn detect_topic_query() {
    let output = docseek_cmd()
        .args(["detect", "How", "do", "I", "use", "date", "picker", "in", "shadcn?"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = stdout_json(&output);
    assert_eq!(json["topic"], "date");
    assert_eq!(json["library"], "shadcn");
    assert_eq!(json["isTopicSpecific"], true);
    assert_eq!(json["query"], "How do I use date picker in shadcn?");
}

#[test]
fn detect_general_query() {
    let output = docseek_cmd()
        .args(["detect", "Documentation for Next.js"])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = stdout_json(&output);
    assert_eq!(json, serde_json::json!({ "isTopicSpecific": false }));
}

#[test]
fn detect_without_query_is_usage_error() {
    docseek_cmd()
        .arg("detect")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_exits_one() {
    docseek_cmd().arg("nope").assert().code(1);
}

#[test]
fn help_exits_zero() {
    docseek_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("detect").and(predicate::str::contains("analyze")));
}
