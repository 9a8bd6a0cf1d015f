//! # docseek-core
//!
//! Core functionality for docseek - turns free-text documentation questions
//! into llms.txt lookups and plans how to read the result.
//!
//! ## Architecture
//!
//! The crate is organized around a small pipeline:
//!
//! - **Classification**: Recognize "topic in library" questions and normalize both parts
//! - **URL Resolution**: Map a library (and topic) to ordered candidate manifest URLs
//! - **Retrieval**: Try candidates in order against the documentation host
//! - **Analysis**: Extract, prioritize and distribute the URLs listed in a manifest
//! - **Configuration**: Layered `.env` files plus the process environment
//!
//! ## Quick Start
//!
//! ```rust
//! use docseek_core::{classify, resolve_candidates};
//!
//! let hit = classify("How do I use date picker in shadcn?").expect("topic query");
//! assert_eq!(hit.topic, "date");
//! assert_eq!(hit.library, "shadcn");
//!
//! let urls = resolve_candidates(&hit.library, Some(&hit.topic));
//! assert_eq!(urls[0], "https://context7.com/shadcn-ui/ui/llms.txt?topic=date");
//! assert_eq!(urls[1], "https://context7.com/shadcn-ui/ui/llms.txt");
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, Error>`]. Retrieval itself never
//! fails: per-candidate errors are logged and the outcome is reported as a
//! [`FetchResult`].
//!
//! ```rust
//! use docseek_core::Error;
//!
//! let err = Error::NotFound("No documentation at 'https://context7.com/x/llms.txt'".into());
//! assert!(!err.is_recoverable());
//! assert_eq!(err.category(), "not_found");
//! ```

/// llms.txt manifest parsing, prioritization and agent distribution
pub mod analyze;
/// Topic-query classification
pub mod classify;
/// Layered `.env` configuration
pub mod config;
/// Error types and result aliases
pub mod error;
/// HTTP fetching with optional bearer auth
pub mod fetcher;
/// Topic and library name normalization
pub mod normalize;
/// Candidate-by-candidate documentation retrieval
pub mod retrieve;
/// Candidate URL construction for the documentation host
pub mod url_resolver;

// Re-export commonly used types
pub use analyze::{AgentDistribution, AnalysisReport, Priority, PriorityGroups, analyze};
pub use classify::{TopicMatch, classify};
pub use config::{LayeredEnv, Settings};
pub use error::{Error, Result};
pub use fetcher::Fetcher;
pub use retrieve::{DocsRetriever, FetchResult, FoundDocs};
pub use url_resolver::{UrlResolver, resolve_candidates};
