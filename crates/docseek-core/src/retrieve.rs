//! Query-driven documentation retrieval.
//!
//! Ties the pipeline together: classify the query, build candidate URLs,
//! then GET each candidate in order until one returns a non-empty body.
//! Per-candidate failures (404, other statuses, transport errors) are logged
//! and skipped; the caller only ever sees a [`FetchResult`].
//!
//! ```no_run
//! use docseek_core::retrieve::DocsRetriever;
//! use docseek_core::config::Settings;
//!
//! # async fn example() -> docseek_core::Result<()> {
//! let retriever = DocsRetriever::from_settings(&Settings::default())?;
//! let result = retriever.retrieve("How do I use date picker in shadcn?").await;
//! if let Some(url) = result.url() {
//!     println!("found docs at {url}");
//! }
//! # Ok(())
//! # }
//! ```

use regex::Regex;
use serde::{Serialize, Serializer};
use std::sync::LazyLock;
use tracing::{debug, info};

use crate::classify::classify;
use crate::config::Settings;
use crate::fetcher::Fetcher;
use crate::normalize::normalize_library;
use crate::url_resolver::{UrlResolver, carries_topic};
use crate::Result;

/// Name reported in every result.
pub const SOURCE_NAME: &str = "context7.com";

/// Error message of a failed lookup.
pub const NOT_FOUND_MESSAGE: &str = "Documentation not found on context7.com";

/// Fallback advice attached to a failed lookup.
pub const FALLBACK_SUGGESTION: &str = "Try repository analysis or web search";

/// Loose "docs for X" extraction used when no topic was recognized.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static GENERAL_LIBRARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:documentation|docs|guide) (?:for )?(.+)").unwrap());

/// Pull a bare library name out of a general query such as
/// "Documentation for Next.js".
///
/// The remainder goes through [`normalize_library`], the same as a library
/// captured by the classifier; an empty result yields `None`.
#[must_use]
pub fn extract_general_library(query: &str) -> Option<String> {
    let caps = GENERAL_LIBRARY_RE.captures(query)?;
    let library = normalize_library(caps.get(1)?.as_str());

    (!library.is_empty()).then_some(library)
}

/// A successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundDocs {
    /// URL that answered.
    pub url: String,
    /// Raw response body.
    pub content: String,
    /// Whether `url` carried a topic parameter.
    pub topic_specific: bool,
}

/// Outcome of [`DocsRetriever::retrieve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// A candidate answered with content.
    Found(FoundDocs),
    /// No candidate answered; holds every URL that was tried, in order.
    Missing {
        /// Attempted URLs.
        urls: Vec<String>,
    },
}

impl FetchResult {
    /// Whether a candidate answered.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// URL that answered, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Found(found) => Some(found.url.as_str()),
            Self::Missing { .. } => None,
        }
    }

    /// Body of the answering URL, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Found(found) => Some(found.content.as_str()),
            Self::Missing { .. } => None,
        }
    }
}

/// JSON shape shared by both outcomes; unset fields are omitted.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireResult<'a> {
    success: bool,
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    topic_specific: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    urls: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'static str>,
}

impl Serialize for FetchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let wire = match self {
            Self::Found(found) => WireResult {
                success: true,
                source: SOURCE_NAME,
                url: Some(found.url.as_str()),
                content: Some(found.content.as_str()),
                topic_specific: Some(found.topic_specific),
                error: None,
                urls: None,
                suggestion: None,
            },
            Self::Missing { urls } => WireResult {
                success: false,
                source: SOURCE_NAME,
                url: None,
                content: None,
                topic_specific: None,
                error: Some(NOT_FOUND_MESSAGE),
                urls: Some(urls.as_slice()),
                suggestion: Some(FALLBACK_SUGGESTION),
            },
        };
        wire.serialize(serializer)
    }
}

/// Resolves free-text queries to documentation.
pub struct DocsRetriever {
    fetcher: Fetcher,
    resolver: UrlResolver,
}

impl DocsRetriever {
    /// Retriever over an explicit fetcher and resolver.
    pub const fn new(fetcher: Fetcher, resolver: UrlResolver) -> Self {
        Self { fetcher, resolver }
    }

    /// Retriever for the default host, authenticated with the configured key.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let fetcher = Fetcher::new()?.with_api_key(settings.api_key.clone());
        Ok(Self::new(fetcher, UrlResolver::default()))
    }

    /// Replace the URL resolver (e.g. to point at another host).
    #[must_use]
    pub fn with_resolver(mut self, resolver: UrlResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Candidate URLs for a query, most specific first. Empty when the
    /// query names no library.
    pub fn candidates_for(&self, query: &str) -> Vec<String> {
        if let Some(hit) = classify(query) {
            let urls = self
                .resolver
                .resolve_candidates(&hit.library, Some(&hit.topic));
            debug!(?urls, "Topic-specific URLs");
            return urls;
        }

        match extract_general_library(query) {
            Some(library) => {
                let urls = self.resolver.resolve_candidates(&library, None);
                debug!(?urls, "General library URLs");
                urls
            },
            None => Vec::new(),
        }
    }

    /// Try every candidate in order and return the first non-empty body.
    pub async fn retrieve(&self, query: &str) -> FetchResult {
        let urls = self.candidates_for(query);

        for url in &urls {
            debug!(%url, "Trying URL");
            match self.fetcher.get_text(url).await {
                Ok(content) if !content.is_empty() => {
                    info!(%url, "Documentation found");
                    return FetchResult::Found(FoundDocs {
                        topic_specific: carries_topic(url),
                        url: url.clone(),
                        content,
                    });
                },
                Ok(_) => debug!(%url, "Empty body, trying next candidate"),
                Err(err) => {
                    debug!(%url, category = err.category(), error = %err, "Candidate failed");
                },
            }
        }

        FetchResult::Missing { urls }
    }
}
