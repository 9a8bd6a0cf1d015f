//! # CLI Structure and Argument Parsing
//!
//! The `docseek` command-line interface, built with `clap` derive macros.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Is this a topic question?
//! docseek detect "How do I use date picker in shadcn?"
//!
//! # Fetch documentation for a question
//! docseek fetch "React caching strategies"
//!
//! # Plan how to read a manifest
//! docseek analyze llms.txt
//! curl -s https://example.com/llms.txt | docseek analyze -
//!
//! # Show which configuration layers were found
//! docseek --skill-dir ~/.claude/skills/docs-seeker config
//! ```
//!
//! Every command prints JSON on stdout; logs go to stderr.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for the `docseek` command
#[derive(Parser, Clone, Debug)]
#[command(name = "docseek")]
#[command(version)]
#[command(about = "docseek - find llms.txt documentation for a question", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory whose `.env` files (and two parents') configure the lookup
    #[arg(long, global = true, env = "DOCSEEK_SKILL_DIR", value_name = "DIR")]
    pub skill_dir: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Classify a query as topic-specific or general
    Detect {
        /// Query words, joined with spaces
        #[arg(required = true, num_args = 1.., value_name = "QUERY")]
        query: Vec<String>,
    },

    /// Fetch documentation for a query from the documentation host
    Fetch {
        /// Query words, joined with spaces
        #[arg(required = true, num_args = 1.., value_name = "QUERY")]
        query: Vec<String>,

        /// Override the documentation host
        #[arg(long, hide = true, env = "DOCSEEK_BASE_URL", value_name = "URL")]
        base_url: Option<String>,
    },

    /// Analyze an llms.txt manifest and recommend an agent distribution
    Analyze {
        /// Manifest file, or `-` for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show the resolved configuration
    Config,
}

/// Join positional query words the way a shell user typed them.
pub fn join_query(words: &[String]) -> String {
    words.join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_detect_joins_words() {
        let cli = Cli::try_parse_from(["docseek", "detect", "React", "caching", "strategies"]).unwrap();
        match cli.command {
            Commands::Detect { query } => assert_eq!(join_query(&query), "React caching strategies"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_detect_requires_query() {
        assert!(Cli::try_parse_from(["docseek", "detect"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["docseek", "config", "--verbose", "--skill-dir", "/tmp"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.skill_dir, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["docseek", "-v", "-q", "config"]).is_err());
    }
}
