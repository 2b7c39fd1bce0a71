//! Shared helpers for integration tests

use async_trait::async_trait;
use legalens::client::TextGenerator;
use legalens::config::RetryConfig;
use legalens::error::Result;
use std::sync::Mutex;

/// Generator whose response is computed from the prompt
pub struct ScriptedGenerator {
    script: Box<dyn Fn(&str) -> Result<String> + Send + Sync>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new<F>(script: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        Self {
            script: Box::new(script),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().expect("prompts lock").len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.to_string());
        (self.script)(prompt)
    }
}

/// Retry settings that keep tests fast
pub fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        base_delay_ms: 1,
    }
}
