use crate::{Error, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

/// Per-request timeout used by [`Fetcher::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for fetching llms.txt documentation, with optional bearer auth
pub struct Fetcher {
    client: Client,
    api_key: Option<String>,
}

impl Fetcher {
    /// Creates a new fetcher with configured HTTP client
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a new fetcher with a custom request timeout (primarily for tests)
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("docseek/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self {
            client,
            api_key: None,
        })
    }

    /// Sends `Authorization: Bearer <token>` on every request. Empty tokens are ignored.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.is_empty());
        self
    }

    /// Whether requests carry a bearer token
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Fetches a URL and returns its body
    ///
    /// Only `200 OK` counts as success. `404` maps to [`Error::NotFound`],
    /// other error statuses and transport failures to [`Error::Network`] or
    /// [`Error::Timeout`].
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.header(AUTHORIZATION, format!("Bearer {key}"));
        }

        let response = request
            .send()
            .await
            .map_err(|err| transport_error(url, err))?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("No documentation at '{url}'")));
        }

        if status != StatusCode::OK {
            debug!(%status, %url, "Unexpected status");
            return match response.error_for_status() {
                Err(err) => Err(Error::Network(err)),
                Ok(_) => Err(Error::Other(format!("Unexpected status {status} for '{url}'"))),
            };
        }

        let content = response
            .text()
            .await
            .map_err(|err| transport_error(url, err))?;
        info!("Fetched {} bytes from {}", content.len(), url);
        Ok(content)
    }
}

// Note: Default is not implemented as Fetcher::new() can fail.

/// Timeouts while sending or reading the body become [`Error::Timeout`].
fn transport_error(url: &str, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout(format!("GET {url} exceeded the request timeout"))
    } else {
        Error::Network(err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, header_exists, method, path},
    };

    #[tokio::test]
    async fn test_fetcher_creation() {
        let fetcher = Fetcher::new().unwrap();
        assert!(!fetcher.has_api_key());
        assert!(!fetcher.with_api_key(Some(String::new())).has_api_key());
    }

    #[tokio::test]
    async fn test_get_text_ok() -> anyhow::Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/org/repo/llms.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# Docs\n"))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new()?;
        let body = fetcher
            .get_text(&format!("{}/org/repo/llms.txt", server.uri()))
            .await?;
        assert_eq!(body, "# Docs\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_bearer_header_sent_when_configured() -> anyhow::Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_string("authed"))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new()?.with_api_key(Some("secret".to_string()));
        let body = fetcher.get_text(&format!("{}/x", server.uri())).await?;
        assert_eq!(body, "authed");
        Ok(())
    }

    #[tokio::test]
    async fn test_no_bearer_header_without_key() -> anyhow::Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("anon"))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new()?;
        assert_eq!(fetcher.get_text(&format!("{}/x", server.uri())).await?, "anon");
        Ok(())
    }

    #[tokio::test]
    async fn test_404_maps_to_not_found() -> anyhow::Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = Fetcher::new()?.get_text(&format!("{}/missing", server.uri())).await;
        match result {
            Err(Error::NotFound(msg)) => assert!(msg.contains("/missing")),
            other => panic!("Expected NotFound, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_500_maps_to_network() -> anyhow::Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = Fetcher::new()?.get_text(&format!("{}/err", server.uri())).await;
        assert!(matches!(result, Err(Error::Network(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_non_200_success_is_rejected() -> anyhow::Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let result = Fetcher::new()?.get_text(&format!("{}/empty", server.uri())).await;
        assert!(matches!(result, Err(Error::Other(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_timeout() -> anyhow::Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("slow")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let fetcher = Fetcher::with_timeout(Duration::from_millis(100))?;
        let result = fetcher.get_text(&format!("{}/slow", server.uri())).await;
        assert!(matches!(result, Err(Error::Timeout(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_timeout_while_reading_body() -> anyhow::Result<()> {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // Headers arrive at once, the body never completes.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0u8; 1024];
                let _ = socket.read(&mut request).await;
                let _ = socket
                    .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 64\r\n\r\npartial")
                    .await;
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        });

        let fetcher = Fetcher::with_timeout(Duration::from_millis(200))?;
        let result = fetcher.get_text(&format!("http://{addr}/llms.txt")).await;
        assert!(matches!(result, Err(Error::Timeout(_))), "got {result:?}");
        Ok(())
    }
}
