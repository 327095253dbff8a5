//! Error types for the Analyzer

use thiserror::Error;

/// Analyzer failures
///
/// Orchestration failures never leave [`crate::LicensingAnalyzer::analyze`];
/// they are turned into a degraded result there. `Config` comes from
/// [`crate::AnalyzerConfig::validate`] at startup.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Content exceeds maximum length
    #[error("Content too long: {0} chars (max: {1})")]
    ContentTooLong(usize, usize),

    /// Analysis did not finish in time
    #[error("Analysis timeout")]
    Timeout,

    /// Invalid analyzer settings
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Rejections of a legal question before it is answered
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuestionError {
    /// Question shorter than the minimum length
    #[error("Question must be at least {min} characters (got {actual})")]
    TooShort {
        /// Minimum accepted length
        min: usize,
        /// Length of the submitted question
        actual: usize,
    },
}
