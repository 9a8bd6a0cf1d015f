#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{docseek_cmd, docseek_in, stdout_json};
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOPIC_QUERY: &str = "How do I use date picker in shadcn?";

#[tokio::test]
async fn fetch_topic_docs() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shadcn-ui/ui/llms.txt"))
        .and(query_param("topic", "date"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Date Picker\n"))
        .mount(&server)
        .await;

    let output = docseek_cmd()
        .args(["fetch", TOPIC_QUERY, "--base-url", &server.uri()])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = stdout_json(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["source"], "context7.com");
    assert_eq!(json["topicSpecific"], true);
    assert_eq!(json["content"], "# Date Picker\n");
    Ok(())
}

#[tokio::test]
async fn fetch_not_found_exits_one() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let output = docseek_cmd()
        .args(["fetch", TOPIC_QUERY])
        .env("DOCSEEK_BASE_URL", server.uri())
        .assert()
        .code(1)
        .get_output()
        .clone();

    let json = stdout_json(&output);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Documentation not found on context7.com");
    assert_eq!(json["suggestion"], "Try repository analysis or web search");
    assert_eq!(json["urls"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn fetch_sends_api_key_from_env_file() -> Result<()> {
    let skill = tempdir()?;
    std::fs::write(skill.path().join(".env"), "CONTEXT7_API_KEY=from-file\n")?;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vercel/next.js/llms.txt"))
        .and(header("authorization", "Bearer from-file"))
        .respond_with(ResponseTemplate::new(200).set_body_string("next docs"))
        .mount(&server)
        .await;

    let output = docseek_in(skill.path())
        .args(["fetch", "Documentation", "for", "Next.js", "--base-url", &server.uri()])
        .assert()
        .success()
        .get_output()
        .clone();

    let json = stdout_json(&output);
    assert_eq!(json["topicSpecific"], false);
    assert_eq!(json["content"], "next docs");
    Ok(())
}

#[test]
fn fetch_rejects_invalid_base_url() {
    docseek_cmd()
        .args(["fetch", TOPIC_QUERY, "--base-url", "not a url"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid URL"));
}
