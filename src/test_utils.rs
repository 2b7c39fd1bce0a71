//! Shared test fakes for unit tests
//!
//! Scripted implementations of [`TextGenerator`](crate::client::TextGenerator)
//! used to exercise retry and orchestration behavior without a network.

use crate::client::TextGenerator;
use crate::error::{LegalensError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use tokio::time::Instant;

/// Generator that fails a fixed number of times before succeeding
///
/// Records every prompt and the (tokio) instant of every attempt so tests
/// can assert call counts and backoff delays.
pub struct FlakyGenerator {
    failures_before_success: u32,
    success_text: String,
    always_fail: bool,
    calls: AtomicU32,
    prompts: Mutex<Vec<String>>,
    attempt_times: Mutex<Vec<Instant>>,
}

impl FlakyGenerator {
    /// Fail `failures_before_success` times, then answer `success_text`
    pub fn new(failures_before_success: u32, success_text: impl Into<String>) -> Self {
        Self {
            failures_before_success,
            success_text: success_text.into(),
            always_fail: false,
            calls: AtomicU32::new(0),
            prompts: Mutex::new(Vec::new()),
            attempt_times: Mutex::new(Vec::new()),
        }
    }

    /// Fail every attempt
    pub fn always_failing() -> Self {
        Self {
            always_fail: true,
            ..Self::new(0, "")
        }
    }

    /// Number of attempts made so far
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, in order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }

    /// Instants at which attempts were made, in order
    pub fn attempt_times(&self) -> Vec<Instant> {
        self.attempt_times.lock().expect("times lock").clone()
    }
}

#[async_trait]
impl TextGenerator for FlakyGenerator {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let attempt = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.to_string());
        self.attempt_times
            .lock()
            .expect("times lock")
            .push(Instant::now());

        if self.always_fail || attempt <= self.failures_before_success {
            Err(LegalensError::Transport(format!("scripted failure on attempt {}", attempt)).into())
        } else {
            Ok(self.success_text.clone())
        }
    }
}

/// Generator whose response is computed from the prompt
///
/// Useful for orchestration tests that need different answers (or
/// failures) per section prompt.
pub struct ScriptedGenerator<F>
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    script: F,
    prompts: Mutex<Vec<String>>,
}

impl<F> ScriptedGenerator<F>
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    /// Answer each prompt with `script(prompt)`
    pub fn new(script: F) -> Self {
        Self {
            script,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received, in order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }

    /// Number of prompts received
    pub fn call_count(&self) -> usize {
        self.prompts.lock().expect("prompts lock").len()
    }
}

#[async_trait]
impl<F> TextGenerator for ScriptedGenerator<F>
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.to_string());
        (self.script)(prompt)
    }
}
