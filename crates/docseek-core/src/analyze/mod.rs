//! llms.txt manifest analysis.
//!
//! Extracts URLs from a manifest, labels each with a [`Priority`], and
//! recommends how to spread the work across agents.
//!
//! ## Quick Start
//!
//! ```rust
//! use docseek_core::analyze::analyze;
//!
//! let manifest = "\
//! https://docs.com/getting-started
//! https://docs.com/installation
//! https://docs.com/api-reference
//! https://docs.com/configuration
//! https://docs.com/advanced-usage
//! https://docs.com/migration-guide
//! ";
//!
//! let report = analyze(manifest);
//! assert_eq!(report.total_urls, 6);
//! assert!(report.grouped.critical.len() >= 2);
//! ```
//!
//! ## Manifest Format
//!
//! Line oriented UTF-8 text. Blank lines and lines starting with `#` are
//! skipped. Every other line contributes at most one URL: the first
//! `http(s)://` token on it. Lines without one are ignored.

pub mod distribution;
pub mod priority;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub use distribution::{AgentDistribution, Strategy, recommend_distribution};
pub use priority::{Priority, PriorityGroups, categorize, group_by_priority};

/// Regex for bare URLs: no whitespace, angle brackets or quotes.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static URL_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)https?://[^\s<>"']+"#).unwrap());

/// Extract URLs from manifest text, in order, duplicates kept.
#[must_use]
pub fn parse_manifest(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| URL_TOKEN_RE.find(line))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Per-priority URL counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritySummary {
    /// Number of critical URLs.
    pub critical: usize,
    /// Number of important URLs.
    pub important: usize,
    /// Number of supplementary URLs.
    pub supplementary: usize,
}

impl From<&PriorityGroups> for PrioritySummary {
    fn from(groups: &PriorityGroups) -> Self {
        Self {
            critical: groups.critical.len(),
            important: groups.important.len(),
            supplementary: groups.supplementary.len(),
        }
    }
}

/// Full analysis of one manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Number of extracted URLs.
    pub total_urls: usize,
    /// Extracted URLs in manifest order.
    pub urls: Vec<String>,
    /// URLs grouped by priority.
    pub grouped: PriorityGroups,
    /// Recommended agent distribution.
    pub distribution: AgentDistribution,
    /// Per-group counts.
    pub summary: PrioritySummary,
}

/// Parse, group and plan in one pass.
#[must_use]
pub fn analyze(content: &str) -> AnalysisReport {
    let urls = parse_manifest(content);
    let grouped = group_by_priority(&urls);
    let distribution = recommend_distribution(urls.len());
    let summary = PrioritySummary::from(&grouped);

    AnalysisReport {
        total_urls: urls.len(),
        urls,
        grouped,
        distribution,
        summary,
    }
}
