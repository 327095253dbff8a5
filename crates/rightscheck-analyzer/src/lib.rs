//! Rightscheck Analyzer
//!
//! Turns a description of uploaded content into a licensing analysis using
//! an LLM, and answers free-form legal questions.
//!
//! # Architecture
//!
//! ```text
//! Upload → content description → LicensingAnalyzer → BackoffCaller → LLM
//!                                        ↓
//!                                   RiskScorer → AnalysisResult
//! ```
//!
//! Neither entry point returns an error to its caller: provider failures
//! become sentinel text, and orchestration failures become a degraded
//! [`AnalysisResult`], so a record can always be persisted.
//!
//! # Example Usage
//!
//! ```
//! use rightscheck_analyzer::{AnalyzerConfig, LicensingAnalyzer};
//! use rightscheck_llm::MockProvider;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let llm = MockProvider::new("Public domain work\nNo restrictions apply.");
//! let analyzer = LicensingAnalyzer::new(llm, AnalyzerConfig::default());
//!
//! let result = analyzer.analyze("A scan of a 1890 newspaper").await;
//!
//! assert_eq!(result.licensing_summary, "Public domain work");
//! assert_eq!(result.risk_score, 10);
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod content;
mod error;
mod prompt;
mod question;
mod responder;

pub use analyzer::LicensingAnalyzer;
pub use config::{AnalyzerConfig, BackoffConfig};
pub use content::{content_for_analysis, describe, FileType, UploadDescriptor};
pub use error::{AnalyzerError, QuestionError};
pub use prompt::PromptBuilder;
pub use question::{question_context, QuestionRequest, MIN_QUESTION_LENGTH};
pub use responder::{LegalResponder, PLACEHOLDER_ANSWER};

pub use rightscheck_domain::AnalysisResult;
