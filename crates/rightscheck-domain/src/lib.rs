//! Rightscheck Domain Layer
//!
//! Core value types and pure logic for licensing analysis. This crate has no
//! external runtime dependencies and defines the trait seam that provider
//! implementations plug into.
//!
//! ## Key Concepts
//!
//! - **Analysis result**: full AI response, its first-line summary, and a risk score
//! - **Risk score**: integer in `[10, 100]` derived from keyword presence
//! - **Provider**: anything that turns a prompt into generated text
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure business logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod risk;
pub mod traits;

// Re-exports for convenience
pub use analysis::{AnalysisRequest, AnalysisResult};
pub use risk::{RiskAssessment, RiskScorer};
pub use traits::{LlmProvider, ProviderError};
