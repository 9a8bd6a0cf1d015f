//! Query classification: does a free-text query target a specific topic
//! within a library, or is it a general request for a library's docs?
//!
//! Classification is table driven. General patterns are checked first and
//! short-circuit everything else; otherwise the topic patterns are tried in
//! order and the first match wins.
//!
//! ```rust
//! use docseek_core::classify::classify;
//!
//! let hit = classify("How do I use date picker in shadcn?").unwrap();
//! assert_eq!(hit.topic, "date");
//! assert_eq!(hit.library, "shadcn");
//!
//! assert!(classify("Documentation for Next.js").is_none());
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use crate::normalize::{normalize_library, normalize_topic};

/// A query that names a topic inside a library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicMatch {
    /// The trimmed query the match was extracted from.
    pub query: String,
    /// Normalized topic token (see [`normalize_topic`]).
    pub topic: String,
    /// Normalized library name (see [`normalize_library`]).
    pub library: String,
    /// Always `true` for a produced match; kept for the JSON shape.
    pub is_topic_specific: bool,
}

/// Which capture group holds which mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOrder {
    /// Group 1 is the topic, group 2 the library ("use X in Y").
    TopicThenLibrary,
    /// Group 1 is the library, group 2 the topic ("Y X strategies").
    LibraryThenTopic,
}

/// Phrases that ask about a library as a whole.
pub const GENERAL_PATTERNS: &[&str] = &[
    r"(?:documentation|docs) for (.+)",
    r"(.+?) (?:getting started|quick ?start|introduction)",
    r"(?:how to use|learn) (.+)",
    r"(.+?) (?:api reference|overview|basics)",
];

/// Phrases that name a topic and a library, in evaluation order.
pub const TOPIC_PATTERNS: &[(&str, CaptureOrder)] = &[
    (
        r"how (?:do i|to|can i) (?:use|implement|add|setup|configure) (?:the )?(.+?) (?:in|with|for) (.+)",
        CaptureOrder::TopicThenLibrary,
    ),
    (
        r"(.+?) (.+?) (?:strategies|patterns|techniques|methods|approaches)",
        CaptureOrder::LibraryThenTopic,
    ),
    (
        r"(.+?) (.+?) (?:documentation|docs|guide|tutorial)",
        CaptureOrder::TopicThenLibrary,
    ),
    (
        r"using (.+?) (?:with|in|for) (.+)",
        CaptureOrder::TopicThenLibrary,
    ),
    (
        r"(.+?) (.+?) (?:guide|implementation|setup|configuration)",
        CaptureOrder::TopicThenLibrary,
    ),
    (
        r"implement(?:ing)? (.+?) (?:in|with|for|using) (.+)",
        CaptureOrder::TopicThenLibrary,
    ),
];

/// Compile a pattern case-insensitively.
///
/// SAFETY: every pattern fed here is a compile-time constant known to be valid.
#[allow(clippy::unwrap_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).unwrap()
}

static GENERAL_RE: LazyLock<Vec<Regex>> =
    LazyLock::new(|| GENERAL_PATTERNS.iter().map(|p| compile(p)).collect());

static TOPIC_RE: LazyLock<Vec<(Regex, CaptureOrder)>> = LazyLock::new(|| {
    TOPIC_PATTERNS
        .iter()
        .map(|(p, order)| (compile(p), *order))
        .collect()
});

/// Returns `true` when the query matches any general pattern.
#[must_use]
pub fn is_general(query: &str) -> bool {
    GENERAL_RE.iter().any(|re| re.is_match(query))
}

/// Classify a query.
///
/// Returns `None` for empty input, for any query matching a general pattern
/// and for queries no pattern recognizes.
#[must_use]
pub fn classify(query: &str) -> Option<TopicMatch> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }

    if is_general(trimmed) {
        debug!("Matched general pattern, no topic");
        return None;
    }

    for (index, (re, order)) in TOPIC_RE.iter().enumerate() {
        let Some(caps) = re.captures(trimmed) else {
            continue;
        };
        let (Some(first), Some(second)) = (caps.get(1), caps.get(2)) else {
            continue;
        };

        let (topic, library) = match order {
            CaptureOrder::TopicThenLibrary => (first.as_str(), second.as_str()),
            CaptureOrder::LibraryThenTopic => (second.as_str(), first.as_str()),
        };
        let topic = normalize_topic(topic);
        let library = normalize_library(library);

        debug!(pattern = index, %topic, %library, "Matched topic pattern");

        return Some(TopicMatch {
            query: trimmed.to_string(),
            topic,
            library,
            is_topic_specific: true,
        });
    }

    debug!("No pattern matched, treating as general");
    None
}
