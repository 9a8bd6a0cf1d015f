//! Canonicalization of topic and library mentions extracted from queries.
//!
//! ```rust
//! use docseek_core::normalize::{normalize_library, normalize_topic};
//!
//! assert_eq!(normalize_topic("Date Picker"), "date");
//! assert_eq!(normalize_topic("CACHING!"), "caching");
//! assert_eq!(normalize_library("Next.js"), "next.js");
//! assert_eq!(normalize_library("shadcn/ui"), "shadcn/ui");
//! ```

/// Maximum length of a normalized topic token.
pub const MAX_TOPIC_LEN: usize = 20;

/// Normalize a topic mention into a short URL-safe token.
///
/// Lowercases, trims, drops everything outside `[a-z0-9]`, whitespace and
/// `-`, joins words with hyphens, then keeps only the first hyphen segment
/// truncated to [`MAX_TOPIC_LEN`] characters.
#[must_use]
pub fn normalize_topic(topic: &str) -> String {
    let lowered = topic.to_lowercase();
    let kept: String = lowered
        .trim()
        .chars()
        .filter(|c| is_token_char(*c) || c.is_whitespace() || *c == '-')
        .collect();
    let hyphenated = collapse_whitespace(&kept);

    hyphenated
        .split('-')
        .next()
        .unwrap_or_default()
        .chars()
        .take(MAX_TOPIC_LEN)
        .collect()
}

/// Normalize a library mention, preserving `/` and `.` so scoped names such
/// as `org/repo` or `next.js` survive intact.
#[must_use]
pub fn normalize_library(library: &str) -> String {
    let lowered = library.to_lowercase();
    let kept: String = lowered
        .trim()
        .chars()
        .filter(|c| is_token_char(*c) || c.is_whitespace() || matches!(*c, '-' | '/' | '.'))
        .collect();
    collapse_whitespace(&kept)
}

const fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Replace every run of whitespace with a single hyphen.
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_run = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !in_run {
                result.push('-');
                in_run = true;
            }
        } else {
            result.push(c);
            in_run = false;
        }
    }

    result
}
