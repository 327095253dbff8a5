//! Legal question requests and their context

use crate::content::UploadDescriptor;
use crate::error::QuestionError;

/// Shortest question accepted, in characters
pub const MIN_QUESTION_LENGTH: usize = 5;

/// A validated legal question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    /// Question text
    pub question: String,

    /// Description of the content the question is about
    pub context: Option<String>,
}

impl QuestionRequest {
    /// Validate and build a request
    pub fn new(question: impl Into<String>, context: Option<String>) -> Result<Self, QuestionError> {
        let question = question.into();
        let actual = question.chars().count();
        if actual < MIN_QUESTION_LENGTH {
            return Err(QuestionError::TooShort {
                min: MIN_QUESTION_LENGTH,
                actual,
            });
        }
        Ok(Self { question, context })
    }
}

/// Context line for a question about `upload`
///
/// `summary` is the licensing summary of the upload's analysis, if one exists.
pub fn question_context(upload: &UploadDescriptor, summary: Option<&str>) -> String {
    format!(
        "File type: {}, File name: {}, Analysis: {}",
        upload.file_type,
        upload.file_name,
        summary.filter(|s| !s.is_empty()).unwrap_or("No analysis available")
    )
}
