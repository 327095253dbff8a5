//! Configuration for the Analyzer

use crate::error::AnalyzerError;
use rightscheck_llm::backoff::{
    BackoffPolicy, DEFAULT_INITIAL_DELAY_MS, DEFAULT_MAX_RETRIES, DEFAULT_MULTIPLIER,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry settings for rate-limited provider calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackoffConfig {
    /// Rate-limited attempts before giving up
    pub max_retries: u32,

    /// Delay before the first retry (milliseconds)
    pub initial_delay_ms: u64,

    /// Growth factor between consecutive delays
    pub multiplier: u32,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}

impl BackoffConfig {
    /// Convert into the policy the caller runs with
    pub fn policy(&self) -> BackoffPolicy {
        BackoffPolicy {
            max_retries: self.max_retries,
            initial_delay: Duration::from_millis(self.initial_delay_ms),
            multiplier: self.multiplier,
        }
    }
}

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum content length (characters)
    pub max_content_length: usize,

    /// Maximum time for one analysis, retries included (seconds)
    pub analysis_timeout_secs: u64,

    /// Characters of content echoed to the log
    pub log_preview_chars: usize,

    /// Retry settings
    pub backoff: BackoffConfig,
}

impl Default for AnalyzerConfig {
    /// Default configuration matching the historical behavior
    fn default() -> Self {
        Self {
            max_content_length: 1_000_000,
            analysis_timeout_secs: 120,
            log_preview_chars: 100,
            backoff: BackoffConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Get the analysis timeout as a Duration
    pub fn analysis_timeout(&self) -> Duration {
        Duration::from_secs(self.analysis_timeout_secs)
    }

    /// Retry policy derived from the backoff settings
    pub fn backoff_policy(&self) -> BackoffPolicy {
        self.backoff.policy()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.max_content_length == 0 {
            return Err(config_error("max_content_length must be greater than 0"));
        }
        if self.analysis_timeout_secs == 0 {
            return Err(config_error("analysis_timeout_secs must be greater than 0"));
        }
        if self.backoff.max_retries == 0 {
            return Err(config_error("backoff.max_retries must be greater than 0"));
        }
        if self.backoff.multiplier == 0 {
            return Err(config_error("backoff.multiplier must be at least 1"));
        }
        let timeout = self.analysis_timeout();
        let wait = self.backoff_wait_up_to(timeout);
        if wait >= timeout {
            return Err(config_error(format!(
                "analysis_timeout_secs ({}) must exceed the worst-case backoff wait (at least {} ms)",
                self.analysis_timeout_secs,
                wait.as_millis()
            )));
        }
        Ok(())
    }

    /// Total backoff wait, summed only until it reaches `limit`
    fn backoff_wait_up_to(&self, limit: Duration) -> Duration {
        let policy = self.backoff_policy();
        let mut total = Duration::ZERO;
        let mut delay = policy.initial_delay;
        for _ in 1..policy.max_retries {
            total = total.saturating_add(delay);
            if total >= limit || delay.is_zero() {
                break;
            }
            delay = delay.saturating_mul(policy.multiplier);
        }
        total
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

fn config_error(message: impl Into<String>) -> AnalyzerError {
    AnalyzerError::Config(message.into())
}
