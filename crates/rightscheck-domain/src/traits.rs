//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use std::future::Future;

/// Classification every provider error must offer
///
/// Rate limiting is the one failure expected to resolve with time, so
/// callers retry it and nothing else.
pub trait ProviderError: std::error::Error + Send + Sync + 'static {
    /// Whether the provider rejected the request for exceeding its rate limit
    fn is_rate_limited(&self) -> bool;
}

/// Trait for generative text providers
///
/// Implemented by the infrastructure layer (rightscheck-llm)
pub trait LlmProvider: Send + Sync {
    /// Error type for provider operations
    type Error: ProviderError;

    /// Identifier of the model requests are sent to
    fn model_name(&self) -> &str;

    /// Send one prompt and return the generated text verbatim
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
