//! Legal question answering

use crate::question::QuestionRequest;
use tracing::debug;

/// Answer returned for every question
pub const PLACEHOLDER_ANSWER: &str = "This is a placeholder legal answer.";

/// Answers free-form legal questions
///
/// Answers are not generated yet: every question receives
/// [`PLACEHOLDER_ANSWER`] regardless of its text or context.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalResponder;

impl LegalResponder {
    /// Create a new responder
    pub fn new() -> Self {
        Self
    }

    /// Answer `question`, optionally about the content described by `context`
    pub fn answer(&self, question: &str, context: Option<&str>) -> String {
        debug!(
            "Answering question ({} chars, context: {})",
            question.chars().count(),
            context.is_some()
        );
        PLACEHOLDER_ANSWER.to_string()
    }

    /// Answer a validated request
    pub fn answer_request(&self, request: &QuestionRequest) -> String {
        self.answer(&request.question, request.context.as_deref())
    }
}
