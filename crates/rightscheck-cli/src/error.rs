//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid analyzer settings
    #[error(transparent)]
    Analyzer(#[from] rightscheck_analyzer::AnalyzerError),

    /// Required credential absent at startup
    #[error("Missing {0} in environment variables.")]
    MissingApiKey(&'static str),

    /// Provider setup error
    #[error("LLM error: {0}")]
    Llm(#[from] rightscheck_llm::LlmError),

    /// Rejected question
    #[error("Invalid question: {0}")]
    Question(#[from] rightscheck_analyzer::QuestionError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
