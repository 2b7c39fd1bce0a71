//! Legalens - AI-assisted legal document review library
//!
//! This library provides the core functionality for the Legalens CLI:
//! document loading, prompt assembly, the retrying generation client, and
//! the analysis orchestrator that merges generated sections into a
//! session.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `documents`: Document model and the per-session document store
//! - `upload`: Upload filtering and pass-through text extraction
//! - `prompts`: Deterministic prompt assembly over fixed templates
//! - `client`: Gemini generation client with bounded retry
//! - `analyzer`: Orchestration of the analysis workflows
//! - `session`: Explicit session state (documents, results, transcript)
//! - `render`: Terminal rendering of generated markup
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use legalens::{Analyzer, Config, GenerationClient, Session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml")?;
//!     config.validate()?;
//!
//!     let analyzer = Analyzer::new(GenerationClient::from_config(&config)?);
//!     let mut session = Session::new();
//!     // Load documents into the session, then:
//!     analyzer.run_full_analysis(&mut session).await;
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod documents;
pub mod error;
pub mod prompts;
pub mod render;
pub mod session;
pub mod upload;

// Re-export commonly used types
pub use analyzer::Analyzer;
pub use client::{GeminiClient, GenerationClient, TextGenerator};
pub use config::Config;
pub use documents::{Document, DocumentStore};
pub use error::{LegalensError, Result};
pub use session::{AnalysisMode, AnalysisResult, ChatRole, ChatTurn, RunState, Section, Session};

#[cfg(test)]
pub mod test_utils;
