//! Priority labels for documentation URLs.
//!
//! ```rust
//! use docseek_core::analyze::priority::{Priority, categorize};
//!
//! assert_eq!(categorize("https://docs.com/getting-started"), Priority::Critical);
//! assert_eq!(categorize("https://docs.com/advanced-usage"), Priority::Supplementary);
//! assert_eq!(categorize("https://docs.com/random-page"), Priority::Important);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse ranking of a URL's importance for onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Entry points: introductions, installation, core concepts.
    Critical,
    /// Guides, references and everything without a keyword.
    Important,
    /// Deep dives, migrations, FAQs and project meta pages.
    Supplementary,
}

impl Priority {
    /// Order in which keyword sets are checked.
    pub const MATCH_ORDER: [Self; 3] = [Self::Critical, Self::Supplementary, Self::Important];

    /// Keywords matched as substrings of the lowercased URL.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Critical => &[
                "getting-started",
                "quick-start",
                "quickstart",
                "introduction",
                "intro",
                "overview",
                "installation",
                "install",
                "setup",
                "basics",
                "core-concepts",
                "fundamentals",
            ],
            Self::Supplementary => &[
                "advanced",
                "internals",
                "migration",
                "migrate",
                "troubleshooting",
                "troubleshoot",
                "faq",
                "frequently-asked",
                "changelog",
                "contributing",
                "contribute",
            ],
            Self::Important => &[
                "guide",
                "tutorial",
                "example",
                "api-reference",
                "api",
                "reference",
                "configuration",
                "config",
                "routing",
                "route",
                "data-fetching",
                "authentication",
                "auth",
            ],
        }
    }

    /// Lowercase label used in JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Important => "important",
            Self::Supplementary => "supplementary",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assign a priority to a URL.
///
/// Keyword sets are checked critical, then supplementary, then important;
/// the first keyword found anywhere in the lowercased URL wins. URLs with no
/// keyword are [`Priority::Important`].
#[must_use]
pub fn categorize(url: &str) -> Priority {
    let lowered = url.to_lowercase();

    Priority::MATCH_ORDER
        .into_iter()
        .find(|priority| priority.keywords().iter().any(|kw| lowered.contains(kw)))
        .unwrap_or(Priority::Important)
}

/// URLs partitioned by priority, each list in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityGroups {
    /// Critical URLs.
    pub critical: Vec<String>,
    /// Important URLs.
    pub important: Vec<String>,
    /// Supplementary URLs.
    pub supplementary: Vec<String>,
}

impl PriorityGroups {
    /// Append a URL to the group for `priority`.
    pub fn push(&mut self, priority: Priority, url: String) {
        match priority {
            Priority::Critical => self.critical.push(url),
            Priority::Important => self.important.push(url),
            Priority::Supplementary => self.supplementary.push(url),
        }
    }

    /// URLs in the group for `priority`.
    #[must_use]
    pub fn get(&self, priority: Priority) -> &[String] {
        match priority {
            Priority::Critical => &self.critical,
            Priority::Important => &self.important,
            Priority::Supplementary => &self.supplementary,
        }
    }

    /// Total number of grouped URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.critical.len() + self.important.len() + self.supplementary.len()
    }

    /// Whether no URL was grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split for the phased strategy: critical URLs first, then important
    /// followed by supplementary.
    #[must_use]
    pub fn phase_split(&self) -> (Vec<&str>, Vec<&str>) {
        let first = self.critical.iter().map(String::as_str).collect();
        let second = self
            .important
            .iter()
            .chain(&self.supplementary)
            .map(String::as_str)
            .collect();
        (first, second)
    }
}

/// Group URLs by [`categorize`], preserving order within each group.
#[must_use]
pub fn group_by_priority(urls: &[String]) -> PriorityGroups {
    let mut groups = PriorityGroups::default();
    for url in urls {
        groups.push(categorize(url), url.clone());
    }
    groups
}
