//! Generation client for the Gemini text-generation API
//!
//! This module defines the `TextGenerator` trait (one logical request
//! attempt) and two concrete pieces: `GeminiClient`, which speaks the
//! generateContent wire protocol with a fixed request envelope, and
//! `GenerationClient`, which wraps any generator with the bounded
//! linear-backoff retry policy and folds exhausted failures into a fixed
//! user-facing error string. Callers of `generate` never see a raw
//! transport error.

use crate::config::{Config, GeminiConfig, RetryConfig};
use crate::error::{LegalensError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Terminal user-facing error text substituted for real output once
/// retries are exhausted
pub const TERMINAL_ERROR_TEXT: &str =
    "Error: Could not analyze legal document. Please check your internet connection and try again.";

// Fixed generation parameters. These are part of the request envelope and
// deliberately not tunable by callers.
const TEMPERATURE: f64 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f64 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 2048;

/// A single logical generation attempt
///
/// Implementations perform one request and return the generated text or an
/// error. Retrying is the wrapper's concern, not the generator's.
///
/// # Examples
///
/// ```
/// use legalens::client::TextGenerator;
/// use legalens::error::Result;
/// use async_trait::async_trait;
///
/// struct Echo;
///
/// #[async_trait]
/// impl TextGenerator for Echo {
///     async fn complete(&self, prompt: &str) -> Result<String> {
///         Ok(prompt.to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Perform one generation attempt for the given prompt
    ///
    /// # Errors
    ///
    /// Returns a transport error on network/HTTP failure and a malformed
    /// response error when the response shape is unexpected
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Request body for generateContent
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationParams,
    #[serde(rename = "safetySettings")]
    safety_settings: Vec<SafetySetting>,
}

/// Content block shared by request and response
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

/// One text part of a content block
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Fixed sampling parameters
#[derive(Debug, Serialize)]
struct GenerationParams {
    temperature: f64,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "topP")]
    top_p: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

/// One safety threshold entry
#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

/// Response body from generateContent
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// One candidate in the response
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Gemini generateContent client
///
/// Holds only fixed configuration; individual calls share no mutable
/// state, so a single instance is safe to use from concurrent tasks.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
    api_key: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Arguments
    ///
    /// * `config` - API base, model, timeout, and key settings
    ///
    /// # Errors
    ///
    /// Returns error if no API key is configured or the HTTP client fails
    /// to initialize
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config.resolved_api_key()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("legalens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LegalensError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "Initialized Gemini client: api_base={}, model={}",
            config.api_base,
            config.model
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Full generateContent endpoint URL for the configured model
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Assemble the fixed request envelope around a prompt
    fn build_request(prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationParams {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
            safety_settings: vec![
                SafetySetting {
                    category: "HARM_CATEGORY_HARASSMENT",
                    threshold: "BLOCK_MEDIUM_AND_ABOVE",
                },
                SafetySetting {
                    category: "HARM_CATEGORY_HATE_SPEECH",
                    threshold: "BLOCK_MEDIUM_AND_ABOVE",
                },
            ],
        }
    }

    /// Extract the first candidate's text from a response
    ///
    /// Any missing link in the candidates/content/parts/text path is a
    /// malformed response.
    fn extract_text(response: GenerateContentResponse) -> Result<String> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                LegalensError::MalformedResponse("Invalid API response structure".to_string())
                    .into()
            })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = self.endpoint();
        tracing::debug!("Sending generateContent request: {} prompt chars", prompt.len());

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::build_request(prompt))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Gemini request failed: {}", e);
                LegalensError::Transport(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Gemini returned error {}: {}", status, body);
            return Err(LegalensError::Transport(format!("HTTP error! status: {}", status)).into());
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse Gemini response: {}", e);
            LegalensError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        Self::extract_text(parsed)
    }
}

/// Retry wrapper around a [`TextGenerator`]
///
/// `generate` performs up to `max_retries + 1` attempts with linearly
/// increasing backoff (`base_delay * attempt_number`, attempts counted
/// from 1) and returns the terminal error string once attempts are
/// exhausted. It never returns an error value, so orchestration can treat
/// every outcome as displayable text.
#[derive(Clone)]
pub struct GenerationClient {
    generator: Arc<dyn TextGenerator>,
    max_retries: u32,
    base_delay: Duration,
}

impl GenerationClient {
    /// Wrap a generator with the given retry settings
    pub fn new(generator: Arc<dyn TextGenerator>, retry: RetryConfig) -> Self {
        Self {
            generator,
            max_retries: retry.max_retries,
            base_delay: Duration::from_millis(retry.base_delay_ms),
        }
    }

    /// Build a client backed by the real Gemini API from configuration
    ///
    /// # Errors
    ///
    /// Returns error if the Gemini client cannot be constructed
    pub fn from_config(config: &Config) -> Result<Self> {
        let gemini = GeminiClient::new(config.gemini.clone())?;
        Ok(Self::new(Arc::new(gemini), config.retry))
    }

    /// Generate text for a prompt, retrying on failure
    ///
    /// Returns the generated text, or [`TERMINAL_ERROR_TEXT`] after
    /// `max_retries + 1` failed attempts.
    pub async fn generate(&self, prompt: &str) -> String {
        let mut attempt: u32 = 0;
        loop {
            match self.generator.complete(prompt).await {
                Ok(text) => {
                    tracing::debug!("Generation succeeded on attempt {}", attempt + 1);
                    return text;
                }
                Err(err) => {
                    attempt += 1;
                    if attempt > self.max_retries {
                        tracing::error!(
                            "Generation failed after {} attempts: {}",
                            attempt,
                            err
                        );
                        return TERMINAL_ERROR_TEXT.to_string();
                    }
                    let delay = self.base_delay * attempt;
                    tracing::warn!(
                        "Generation attempt {} failed: {}; retrying in {:?}",
                        attempt,
                        err,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
