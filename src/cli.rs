//! Command-line interface definition for Legalens
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for full analysis, plain-language summarization,
//! and interactive document chat.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Legalens - AI-assisted legal document review
///
/// Load legal documents and review them with generated summaries,
/// red-flag reports, key-term breakdowns, and an interactive Q&A chat.
#[derive(Parser, Debug, Clone)]
#[command(name = "legalens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Legalens
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the full analysis: summary, red flags, key terms, recommendations
    Analyze {
        /// Document files to analyze (.pdf, .doc, .docx, .txt)
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Drop into the interactive chat after the analysis
        #[arg(long)]
        chat: bool,
    },

    /// Produce a plain-English summary and legal-terms glossary
    Summarize {
        /// Document files to summarize (.pdf, .doc, .docx, .txt)
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Drop into the interactive chat after the summary
        #[arg(long)]
        chat: bool,
    },

    /// Ask questions about the documents interactively
    Chat {
        /// Document files to load (.pdf, .doc, .docx, .txt)
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_analyze_command() {
        let cli = Cli::try_parse_from(["legalens", "analyze", "lease.txt"]).unwrap();
        if let Commands::Analyze { files, chat } = cli.command {
            assert_eq!(files, vec![PathBuf::from("lease.txt")]);
            assert!(!chat);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_cli_parse_analyze_multiple_files_with_chat() {
        let cli =
            Cli::try_parse_from(["legalens", "analyze", "a.txt", "b.pdf", "--chat"]).unwrap();
        if let Commands::Analyze { files, chat } = cli.command {
            assert_eq!(files.len(), 2);
            assert!(chat);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_cli_analyze_requires_files() {
        assert!(Cli::try_parse_from(["legalens", "analyze"]).is_err());
    }

    #[test]
    fn test_cli_parse_summarize_command() {
        let cli = Cli::try_parse_from(["legalens", "summarize", "nda.docx"]).unwrap();
        assert!(matches!(cli.command, Commands::Summarize { .. }));
    }

    #[test]
    fn test_cli_parse_chat_command() {
        let cli = Cli::try_parse_from(["legalens", "chat", "lease.txt"]).unwrap();
        if let Commands::Chat { files } = cli.command {
            assert_eq!(files, vec![PathBuf::from("lease.txt")]);
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_default_config_path() {
        let cli = Cli::try_parse_from(["legalens", "chat", "a.txt"]).unwrap();
        assert_eq!(cli.config, Some("config/config.yaml".to_string()));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_config_override() {
        let cli =
            Cli::try_parse_from(["legalens", "--config", "other.yaml", "chat", "a.txt"]).unwrap();
        assert_eq!(cli.config, Some("other.yaml".to_string()));
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["legalens", "--verbose", "chat", "a.txt"]).unwrap();
        assert!(cli.verbose);
    }
}
