//! Rate-limit aware calling of an LLM provider
//!
//! Rate-limit rejections are retried with exponential backoff; any other
//! failure ends the call at once. Nothing here returns an error: callers get
//! a [`CallOutcome`], or its legacy text rendering via [`CallOutcome::into_text`],
//! so they can always persist a result.

use rightscheck_domain::traits::{LlmProvider, ProviderError};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default number of rate-limited attempts before giving up
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay before the first retry
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 1000;

/// Default growth factor between consecutive delays
pub const DEFAULT_MULTIPLIER: u32 = 2;

/// Text returned for a non-retryable provider failure
pub const API_FAILURE_MESSAGE: &str = "Error: Unable to process request due to API failure.";

/// Text returned once rate-limit retries are exhausted
pub const RATE_LIMIT_MESSAGE: &str =
    "Error: Unable to process request due to rate limits. Try again later.";

/// Retry schedule for rate-limited calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    /// Rate-limited attempts allowed before giving up
    pub max_retries: u32,

    /// Wait before the first retry
    pub initial_delay: Duration,

    /// Factor applied to the delay after each wait
    pub multiplier: u32,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay: Duration::from_millis(DEFAULT_INITIAL_DELAY_MS),
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}

impl BackoffPolicy {
    /// Same schedule with a different retry bound
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Delays slept between attempts when every attempt is rate limited
    ///
    /// The last rate-limited attempt is not followed by a wait, so a bound of
    /// `n` yields `n - 1` delays.
    pub fn schedule(&self) -> Vec<Duration> {
        let mut delays = Vec::new();
        let mut delay = self.initial_delay;
        for _ in 1..self.max_retries {
            delays.push(delay);
            delay = delay.saturating_mul(self.multiplier);
        }
        delays
    }
}

/// How a provider call ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// Provider text, verbatim
    Success(String),

    /// Every allowed attempt was rate limited
    RateLimitExhausted {
        /// Rate-limited attempts made
        attempts: u32,
    },

    /// Non-retryable failure
    ProviderFailure(String),
}

impl CallOutcome {
    /// Whether the provider produced text
    pub fn is_success(&self) -> bool {
        matches!(self, CallOutcome::Success(_))
    }

    /// Provider text, or the legacy sentinel message for a failure
    pub fn into_text(self) -> String {
        match self {
            CallOutcome::Success(text) => text,
            CallOutcome::RateLimitExhausted { .. } => RATE_LIMIT_MESSAGE.to_string(),
            CallOutcome::ProviderFailure(_) => API_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Wraps a provider with rate-limit retries
///
/// Stateless between calls; one caller can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct BackoffCaller<P> {
    provider: P,
    policy: BackoffPolicy,
}

impl<P: LlmProvider> BackoffCaller<P> {
    /// Create a caller around `provider`
    pub fn new(provider: P, policy: BackoffPolicy) -> Self {
        Self { provider, policy }
    }

    /// The wrapped provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The retry schedule in use
    pub fn policy(&self) -> &BackoffPolicy {
        &self.policy
    }

    /// Send `prompt` with the configured retry bound, returning text
    pub async fn call(&self, prompt: &str) -> String {
        self.call_outcome(prompt).await.into_text()
    }

    /// Send `prompt` with an explicit retry bound, returning text
    pub async fn call_with_retries(&self, prompt: &str, max_retries: u32) -> String {
        self.run(prompt, max_retries).await.into_text()
    }

    /// Send `prompt` with the configured retry bound
    pub async fn call_outcome(&self, prompt: &str) -> CallOutcome {
        self.run(prompt, self.policy.max_retries).await
    }

    async fn run(&self, prompt: &str, max_retries: u32) -> CallOutcome {
        let mut retries = 0;
        let mut delay = self.policy.initial_delay;

        debug!(
            "Calling model '{}' (prompt length {} chars)",
            self.provider.model_name(),
            prompt.len()
        );

        while retries < max_retries {
            let error = match self.provider.generate(prompt).await {
                Ok(text) => return CallOutcome::Success(text),
                Err(e) => e,
            };

            warn!("Error calling model '{}': {}", self.provider.model_name(), error);

            if !error.is_rate_limited() {
                return CallOutcome::ProviderFailure(error.to_string());
            }

            retries += 1;
            if retries >= max_retries {
                break;
            }

            info!(
                "Rate limited, retrying after {} ms (retry {}/{})",
                delay.as_millis(),
                retries,
                max_retries - 1
            );
            tokio::time::sleep(delay).await;
            delay = delay.saturating_mul(self.policy.multiplier);
        }

        warn!("Giving up after {} rate-limited attempts", retries);
        CallOutcome::RateLimitExhausted { attempts: retries }
    }
}
