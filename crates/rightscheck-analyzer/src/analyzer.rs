//! Core LicensingAnalyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::prompt::PromptBuilder;
use rightscheck_domain::traits::LlmProvider;
use rightscheck_domain::{AnalysisRequest, AnalysisResult, RiskScorer};
use rightscheck_llm::{BackoffCaller, CallOutcome};
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Produces licensing analyses for uploaded content
pub struct LicensingAnalyzer<P> {
    caller: BackoffCaller<P>,
    scorer: RiskScorer,
    config: AnalyzerConfig,
}

impl<P: LlmProvider> LicensingAnalyzer<P> {
    /// Create a new analyzer around `provider`
    pub fn new(provider: P, config: AnalyzerConfig) -> Self {
        Self {
            caller: BackoffCaller::new(provider, config.backoff_policy()),
            scorer: RiskScorer::new(),
            config,
        }
    }

    /// The provider analyses are sent to
    pub fn provider(&self) -> &P {
        self.caller.provider()
    }

    /// Analyze `content`
    ///
    /// Never fails: provider failures surface as sentinel text in the
    /// result, orchestration failures as [`AnalysisResult::degraded`].
    pub async fn analyze(&self, content: &str) -> AnalysisResult {
        let request = AnalysisRequest::new(content);
        match self.try_analyze(&request).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Error in license analysis: {}", e);
                AnalysisResult::degraded()
            }
        }
    }

    /// Analyze a request, reporting orchestration failures
    pub async fn try_analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, AnalyzerError> {
        let length = request.content.chars().count();
        if length > self.config.max_content_length {
            return Err(AnalyzerError::ContentTooLong(
                length,
                self.config.max_content_length,
            ));
        }

        info!(
            "Analyzing content: {}...",
            request.preview(self.config.log_preview_chars)
        );

        let start = Instant::now();
        let prompt = PromptBuilder::new(&request.content).build();
        debug!("Prompt length: {} chars", prompt.len());

        let outcome = timeout(self.config.analysis_timeout(), self.caller.call_outcome(&prompt))
            .await
            .map_err(|_| AnalyzerError::Timeout)?;

        match &outcome {
            CallOutcome::Success(text) => {
                debug!("LLM response length: {} chars", text.len());
            }
            CallOutcome::RateLimitExhausted { attempts } => {
                warn!("Rate limits exhausted after {} attempts", attempts);
            }
            CallOutcome::ProviderFailure(reason) => {
                warn!("Provider failure: {}", reason);
            }
        }

        let result = AnalysisResult::from_response(outcome.into_text(), &self.scorer);

        info!(
            "Analysis complete in {} ms: risk score {}",
            start.elapsed().as_millis(),
            result.risk_score
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rightscheck_domain::analysis::{DEGRADED_INFO, DEGRADED_SUMMARY, NO_SUMMARY};
    use rightscheck_llm::MockProvider;

    fn create_test_analyzer(response: &str) -> LicensingAnalyzer<MockProvider> {
        LicensingAnalyzer::new(MockProvider::new(response), AnalyzerConfig::default())
    }

    #[tokio::test]
    async fn test_analyze_two_lines() {
        let analyzer = create_test_analyzer("Line one\nLine two");

        let result = analyzer.analyze("sample article").await;

        assert_eq!(result.licensing_summary, "Line one");
        assert_eq!(result.licensing_info, "Line one\nLine two");
        assert_eq!(result.risk_score, 10);
    }

    #[tokio::test]
    async fn test_analyze_empty_response() {
        let analyzer = create_test_analyzer("");

        let result = analyzer.analyze("sample article").await;

        assert_eq!(result.licensing_summary, NO_SUMMARY);
        assert_eq!(result.licensing_info, "");
        assert_eq!(result.risk_score, 10);
    }

    #[tokio::test]
    async fn test_analyze_sends_prompt_with_content() {
        let analyzer = create_test_analyzer("ok");

        analyzer.analyze("my holiday photo").await;

        let prompts = analyzer.provider().prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("\nmy holiday photo\n"));
    }

    #[tokio::test]
    async fn test_content_too_long_degrades() {
        let config = AnalyzerConfig {
            max_content_length: 10,
            ..AnalyzerConfig::default()
        };
        let analyzer = LicensingAnalyzer::new(MockProvider::new("unused"), config);

        let result = analyzer.analyze("this is more than ten characters").await;

        assert_eq!(result.licensing_info, DEGRADED_INFO);
        assert_eq!(result.licensing_summary, DEGRADED_SUMMARY);
        assert_eq!(result.risk_score, 0);
        assert_eq!(analyzer.provider().call_count(), 0);
    }

    #[tokio::test]
    async fn test_try_analyze_reports_error() {
        let config = AnalyzerConfig {
            max_content_length: 3,
            ..AnalyzerConfig::default()
        };
        let analyzer = LicensingAnalyzer::new(MockProvider::default(), config);

        let result = analyzer.try_analyze(&AnalysisRequest::new("four")).await;
        assert!(matches!(result, Err(AnalyzerError::ContentTooLong(4, 3))));
    }
}
