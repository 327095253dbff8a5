//! Rightscheck LLM Provider Layer
//!
//! Provider implementations of the `LlmProvider` trait from
//! `rightscheck-domain`, plus the rate-limit aware [`BackoffCaller`].
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic, scriptable mock for testing
//! - `GeminiProvider`: Google Generative Language REST API
//!
//! # Examples
//!
//! ```
//! use rightscheck_llm::{BackoffCaller, BackoffPolicy, MockProvider};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let caller = BackoffCaller::new(MockProvider::new("Hello from LLM!"), BackoffPolicy::default());
//! assert_eq!(caller.call("test prompt").await, "Hello from LLM!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod backoff;
pub mod gemini;

use rightscheck_domain::traits::{LlmProvider, ProviderError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use backoff::{BackoffCaller, BackoffPolicy, CallOutcome};
pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Provider was constructed with unusable settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl ProviderError for LlmError {
    fn is_rate_limited(&self) -> bool {
        matches!(self, LlmError::RateLimitExceeded)
    }
}

/// One scripted reply of a [`MockProvider`]
#[derive(Debug, Clone)]
enum MockOutcome {
    Response(String),
    RateLimited,
    Failure(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns scripted outcomes in FIFO order, then the default response once
/// the script is drained. No network calls are made.
///
/// # Examples
///
/// ```
/// use rightscheck_llm::MockProvider;
/// use rightscheck_domain::traits::LlmProvider;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let provider = MockProvider::new("Fixed response");
/// provider.push_rate_limit();
///
/// assert!(provider.generate("first").await.is_err());
/// assert_eq!(provider.generate("second").await.unwrap(), "Fixed response");
/// assert_eq!(provider.call_count(), 2);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    script: Arc<Mutex<VecDeque<MockOutcome>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful response
    pub fn push_response(&self, response: impl Into<String>) {
        self.push(MockOutcome::Response(response.into()));
    }

    /// Queue a rate-limit rejection
    pub fn push_rate_limit(&self) {
        self.push(MockOutcome::RateLimited);
    }

    /// Queue a non-retryable failure
    pub fn push_error(&self, message: impl Into<String>) {
        self.push(MockOutcome::Failure(message.into()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or_default()
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    fn push(&self, outcome: MockOutcome) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(outcome);
        }
    }

    fn next_outcome(&self, prompt: &str) -> MockOutcome {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| MockOutcome::Response(self.default_response.clone()))
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    fn model_name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        match self.next_outcome(prompt) {
            MockOutcome::Response(text) => Ok(text),
            MockOutcome::RateLimited => Err(LlmError::RateLimitExceeded),
            MockOutcome::Failure(message) => Err(LlmError::Other(message)),
        }
    }
}
