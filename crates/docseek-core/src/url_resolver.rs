//! Candidate URL construction for hosted llms.txt documentation.
//!
//! A library name (optionally aliased to a canonical `org/repo` identifier)
//! and an optional topic map to an ordered list of candidate URLs, most
//! specific first:
//!
//! 1. `{host}/{base}/llms.txt?topic={topic}` (only when a topic is given)
//! 2. `{host}/{base}/llms.txt`
//!
//! `{base}` is the `org/repo` identifier or `websites/{site}`; see
//! [`base_segments`].
//!
//! Callers try candidates in order and keep the first non-empty response.

use tracing::debug;
use url::Url;

use crate::{Error, Result};

/// Documentation host queried by default.
pub const DEFAULT_DOCS_HOST: &str = "https://context7.com";

/// Manifest filename appended to every base path.
pub const MANIFEST_FILENAME: &str = "llms.txt";

/// Query parameter carrying the topic.
pub const TOPIC_PARAM: &str = "topic";

/// Namespace used for identifiers that are plain site names.
const WEBSITES_NAMESPACE: &str = "websites";

/// Common short names mapped to canonical `org/repo` identifiers.
const KNOWN_REPOS: &[(&str, &str)] = &[
    ("next.js", "vercel/next.js"),
    ("nextjs", "vercel/next.js"),
    ("remix", "remix-run/remix"),
    ("astro", "withastro/astro"),
    ("shadcn", "shadcn-ui/ui"),
    ("shadcn/ui", "shadcn-ui/ui"),
    ("better-auth", "better-auth/better-auth"),
    ("temporal", "temporalio/temporal"),
    ("temporal-go", "temporalio/sdk-go"),
    ("temporal-python", "temporalio/sdk-python"),
];

/// Look up the canonical identifier for a short library name.
///
/// Matching is case-insensitive.
///
/// ```rust
/// use docseek_core::url_resolver::known_repo;
///
/// assert_eq!(known_repo("NextJS"), Some("vercel/next.js"));
/// assert_eq!(known_repo("unknown"), None);
/// ```
#[must_use]
pub fn known_repo(name: &str) -> Option<&'static str> {
    let lowered = name.to_lowercase();
    KNOWN_REPOS
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, repo)| *repo)
}

/// Path segments for an identifier, or `None` when nothing usable remains.
///
/// `org/repo` identifiers are split on `/` (empty, `.` and `..` segments are
/// dropped); anything else is treated as a site name, reduced to `[a-z0-9-]`
/// and placed under `websites/`. Segments are percent-encoded when the URL is
/// built, so they can never leak into the query or fragment.
#[must_use]
pub fn base_segments(identifier: &str) -> Option<Vec<String>> {
    let segments: Vec<String> = if identifier.contains('/') {
        identifier
            .split('/')
            .filter(|segment| !matches!(*segment, "" | "." | ".."))
            .map(str::to_string)
            .collect()
    } else {
        let site: String = identifier
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
            .collect();
        if site.is_empty() {
            Vec::new()
        } else {
            vec![WEBSITES_NAMESPACE.to_string(), site]
        }
    };

    (!segments.is_empty()).then_some(segments)
}

/// Whether a candidate URL carries a topic parameter.
#[must_use]
pub fn carries_topic(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| parsed.query_pairs().any(|(key, _)| key == TOPIC_PARAM))
}

/// Builds candidate documentation URLs against a documentation host.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    base: Url,
}

impl Default for UrlResolver {
    /// SAFETY: [`DEFAULT_DOCS_HOST`] is a constant, valid https URL.
    #[allow(clippy::unwrap_used)]
    fn default() -> Self {
        Self::parse_host(DEFAULT_DOCS_HOST).unwrap()
    }
}

impl UrlResolver {
    /// Resolver for [`DEFAULT_DOCS_HOST`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver for a user-supplied host, rejecting anything that is not an
    /// absolute `http(s)` URL. A trailing slash is optional.
    pub fn parse_host(host: &str) -> Result<Self> {
        let base = Url::parse(host).map_err(|e| Error::InvalidUrl(format!("{host}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") || !base.has_host() {
            return Err(Error::InvalidUrl(format!(
                "{host}: expected an http(s) URL with a host"
            )));
        }
        Ok(Self { base })
    }

    /// The host this resolver builds URLs against, without a trailing slash.
    #[must_use]
    pub fn host(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// Build a single manifest URL for an already-resolved identifier.
    ///
    /// Returns `None` when the identifier has no usable path segment.
    #[must_use]
    pub fn build_url(&self, identifier: &str, topic: Option<&str>) -> Option<String> {
        let segments = base_segments(identifier)?;
        Some(self.manifest_url(&segments, topic))
    }

    fn manifest_url(&self, segments: &[String], topic: Option<&str>) -> String {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push(MANIFEST_FILENAME);
        }
        if let Some(topic) = topic {
            url.query_pairs_mut().append_pair(TOPIC_PARAM, topic);
        }
        url.into()
    }

    /// Candidate URLs for a library and optional topic, most specific first.
    ///
    /// An empty topic counts as no topic. A library that leaves no usable
    /// path segment yields no candidates.
    #[must_use]
    pub fn resolve_candidates(&self, library: &str, topic: Option<&str>) -> Vec<String> {
        let identifier = known_repo(library).unwrap_or(library);
        let Some(segments) = base_segments(identifier) else {
            debug!(%library, "No usable identifier, no candidates");
            return Vec::new();
        };
        let topic = topic.filter(|t| !t.is_empty());

        let mut urls = Vec::with_capacity(2);
        if topic.is_some() {
            urls.push(self.manifest_url(&segments, topic));
        }
        urls.push(self.manifest_url(&segments, None));
        urls
    }
}

/// Candidate URLs against [`DEFAULT_DOCS_HOST`].
#[must_use]
pub fn resolve_candidates(library: &str, topic: Option<&str>) -> Vec<String> {
    UrlResolver::default().resolve_candidates(library, topic)
}
