//! Configuration management for Legalens
//!
//! This module handles loading, parsing, and validating configuration
//! from a YAML file with environment variable overrides.

use crate::error::{LegalensError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable consulted for the API key before the config file
pub const API_KEY_ENV: &str = "LEGALENS_API_KEY";

/// Main configuration structure for Legalens
///
/// Holds everything needed to talk to the generation API and to filter
/// uploaded documents. Generation sampling parameters are deliberately
/// not configurable; they are fixed in the client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Gemini API settings
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Retry behavior for generation requests
    #[serde(default)]
    pub retry: RetryConfig,

    /// Upload filtering settings
    #[serde(default)]
    pub upload: UploadConfig,
}

/// Gemini API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Base URL for the generative-language API
    ///
    /// Tests point this at a local mock server.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Model identifier appended to the generateContent path
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; the `LEGALENS_API_KEY` environment variable takes precedence
    #[serde(default)]
    pub api_key: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash-latest".to_string()
}

fn default_timeout_seconds() -> u64 {
    120
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            api_key: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl GeminiConfig {
    /// Resolve the API key, preferring the environment over the config file
    ///
    /// # Errors
    ///
    /// Returns a configuration error when neither source provides a key.
    pub fn resolved_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                return Ok(key);
            }
        }
        if !self.api_key.is_empty() {
            return Ok(self.api_key.clone());
        }
        Err(LegalensError::Config(format!(
            "No API key configured; set {} or gemini.api_key",
            API_KEY_ENV
        ))
        .into())
    }
}

/// Retry behavior for generation requests
///
/// The delay grows linearly: `base_delay_ms * attempt_number`, with
/// attempts counted from 1. No jitter is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Additional attempts after the first failure
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base backoff delay in milliseconds
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

fn default_max_retries() -> u32 {
    2
}

fn default_base_delay_ms() -> u64 {
    1000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

/// Upload filtering settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted file size in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
}

fn default_max_file_size() -> u64 {
    10 * 1024 * 1024
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// A missing file is not an error: defaults are used so the CLI works
    /// out of the box with only the API key environment variable set.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(
                "Config file {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first invalid field
    pub fn validate(&self) -> Result<()> {
        if self.gemini.api_base.is_empty() {
            return Err(LegalensError::Config("gemini.api_base must not be empty".to_string()).into());
        }
        if !self.gemini.api_base.starts_with("http://") && !self.gemini.api_base.starts_with("https://")
        {
            return Err(LegalensError::Config(format!(
                "gemini.api_base must be an http(s) URL, got: {}",
                self.gemini.api_base
            ))
            .into());
        }
        if self.gemini.model.is_empty() {
            return Err(LegalensError::Config("gemini.model must not be empty".to_string()).into());
        }
        if self.gemini.timeout_seconds == 0 {
            return Err(
                LegalensError::Config("gemini.timeout_seconds must be positive".to_string()).into(),
            );
        }
        if self.retry.base_delay_ms == 0 {
            return Err(
                LegalensError::Config("retry.base_delay_ms must be positive".to_string()).into(),
            );
        }
        if self.upload.max_file_size_bytes == 0 {
            return Err(LegalensError::Config(
                "upload.max_file_size_bytes must be positive".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
