//! Error types for Legalens
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Legalens operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, document loading, generation requests, and
/// response parsing.
#[derive(Error, Debug)]
pub enum LegalensError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or HTTP-level failure while talking to the generation API
    #[error("Transport error: {0}")]
    Transport(String),

    /// The generation API answered with an unexpected response shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A document was rejected by the upload type/size filter
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Legalens operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
