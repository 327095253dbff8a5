//! Analysis request and result value types

use crate::risk::RiskScorer;

/// Summary used when the response has nothing before its first line break
pub const NO_SUMMARY: &str = "No summary available.";

/// `licensing_info` of a degraded result
pub const DEGRADED_INFO: &str = "API Error: Unable to analyze licensing at this time.";

/// `licensing_summary` of a degraded result
pub const DEGRADED_SUMMARY: &str = "Analysis failed due to API limitations.";

/// Text describing an uploaded item, ready for analysis
///
/// Raw file contents for text-like uploads, otherwise a synthesized
/// description of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Content to analyze
    pub content: String,
}

impl AnalysisRequest {
    /// Create a new request
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// First `max_chars` characters of the content, for logging
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

/// Structured outcome of a licensing analysis
///
/// Constructed per call and handed back to the caller for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Full response text
    pub licensing_info: String,

    /// First line of the response
    pub licensing_summary: String,

    /// Risk score; `[10, 100]` for real responses, 0 for degraded results
    pub risk_score: u32,
}

impl AnalysisResult {
    /// Build a result from a raw provider response
    pub fn from_response(response: impl Into<String>, scorer: &RiskScorer) -> Self {
        let licensing_info = response.into();
        let licensing_summary = summary_line(&licensing_info).to_string();
        let risk_score = scorer.score(&licensing_info);

        Self {
            licensing_info,
            licensing_summary,
            risk_score,
        }
    }

    /// Result returned when orchestration itself failed
    pub fn degraded() -> Self {
        Self {
            licensing_info: DEGRADED_INFO.to_string(),
            licensing_summary: DEGRADED_SUMMARY.to_string(),
            risk_score: 0,
        }
    }

    /// Whether this is the degraded fallback result
    pub fn is_degraded(&self) -> bool {
        self.risk_score == 0
            && self.licensing_info == DEGRADED_INFO
            && self.licensing_summary == DEGRADED_SUMMARY
    }
}

/// Text up to the first `\n`, or [`NO_SUMMARY`] if that is empty
pub fn summary_line(response: &str) -> &str {
    match response.split('\n').next() {
        Some(line) if !line.is_empty() => line,
        _ => NO_SUMMARY,
    }
}
