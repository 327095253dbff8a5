//! Integration tests for the licensing analysis pipeline

use rightscheck_analyzer::{
    content_for_analysis, question_context, AnalyzerConfig, FileType, LegalResponder,
    LicensingAnalyzer, QuestionRequest, UploadDescriptor, PLACEHOLDER_ANSWER,
};
use rightscheck_domain::analysis::{DEGRADED_INFO, DEGRADED_SUMMARY};
use rightscheck_llm::backoff::{API_FAILURE_MESSAGE, RATE_LIMIT_MESSAGE};
use rightscheck_llm::MockProvider;
use std::time::Duration;
use tokio::time::Instant;

fn analyzer_with(provider: &MockProvider) -> LicensingAnalyzer<MockProvider> {
    LicensingAnalyzer::new(provider.clone(), AnalyzerConfig::default())
}

#[tokio::test]
async fn test_keyword_response_end_to_end() {
    let provider = MockProvider::new("unauthorized use detected, attribution required");
    let analyzer = analyzer_with(&provider);

    let result = analyzer.analyze("sample article").await;

    assert_eq!(result.risk_score, 70);
    assert_eq!(
        result.licensing_summary,
        "unauthorized use detected, attribution required"
    );
    assert_eq!(
        result.licensing_info,
        "unauthorized use detected, attribution required"
    );
}

#[tokio::test]
async fn test_high_risk_response_is_clamped() {
    let provider = MockProvider::new(
        "Summary: likely infringement\nA DMCA takedown or lawsuit is possible for unauthorized copies.",
    );
    let analyzer = analyzer_with(&provider);

    let result = analyzer.analyze("movie.mp4").await;

    assert_eq!(result.licensing_summary, "Summary: likely infringement");
    assert_eq!(result.risk_score, 100);
}

#[tokio::test(start_paused = true)]
async fn test_rate_limited_then_recovers() {
    let provider = MockProvider::new("Creative Commons licensed\nattribution needed");
    provider.push_rate_limit();
    provider.push_rate_limit();
    let analyzer = analyzer_with(&provider);
    let start = Instant::now();

    let result = analyzer.analyze("photo.jpg").await;

    let waited = start.elapsed();
    assert!(waited >= Duration::from_millis(3000) && waited < Duration::from_millis(3100));
    assert_eq!(provider.call_count(), 3);
    assert_eq!(result.licensing_summary, "Creative Commons licensed");
    assert_eq!(result.risk_score, 30);
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_exhaustion_is_persistable() {
    let provider = MockProvider::new("never reached");
    for _ in 0..3 {
        provider.push_rate_limit();
    }
    let analyzer = analyzer_with(&provider);

    let result = analyzer.analyze("photo.jpg").await;

    assert_eq!(result.licensing_info, RATE_LIMIT_MESSAGE);
    assert_eq!(result.licensing_summary, RATE_LIMIT_MESSAGE);
    assert_eq!(result.risk_score, 10);
}

#[tokio::test]
async fn test_provider_failure_is_persistable() {
    let provider = MockProvider::new("never reached");
    provider.push_error("invalid argument");
    let analyzer = analyzer_with(&provider);

    let result = analyzer.analyze("photo.jpg").await;

    assert_eq!(provider.call_count(), 1);
    assert_eq!(result.licensing_info, API_FAILURE_MESSAGE);
    assert_eq!(result.risk_score, 10);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_degrades() {
    let provider = MockProvider::new("never reached");
    for _ in 0..3 {
        provider.push_rate_limit();
    }
    let config = AnalyzerConfig {
        analysis_timeout_secs: 2,
        ..AnalyzerConfig::default()
    };
    let analyzer = LicensingAnalyzer::new(provider.clone(), config);

    let result = analyzer.analyze("photo.jpg").await;

    assert_eq!(result.licensing_info, DEGRADED_INFO);
    assert_eq!(result.licensing_summary, DEGRADED_SUMMARY);
    assert_eq!(result.risk_score, 0);
}

#[tokio::test]
async fn test_concurrent_analyses_are_independent() {
    let provider = MockProvider::new("No issues found");
    let analyzer = analyzer_with(&provider);

    let (a, b) = tokio::join!(analyzer.analyze("first"), analyzer.analyze("second"));

    assert_eq!(a, b);
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn test_article_upload_flow() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("essay.txt");
    std::fs::write(&path, "An essay quoting song lyrics without permission").unwrap();

    let upload = UploadDescriptor::new("essay.txt", FileType::Article);
    let content = content_for_analysis(&upload, Some(&path));

    let provider = MockProvider::new("Quoted lyrics: license required\nSeek permission.");
    let analyzer = analyzer_with(&provider);
    let result = analyzer.analyze(&content).await;

    assert!(provider.prompts()[0].contains("An essay quoting song lyrics"));
    assert_eq!(result.risk_score, 30);

    let context = question_context(&upload, Some(&result.licensing_summary));
    let request = QuestionRequest::new("Can I publish this essay?", Some(context)).unwrap();
    assert_eq!(
        request.context.as_deref(),
        Some("File type: ARTICLE, File name: essay.txt, Analysis: Quoted lyrics: license required")
    );
    assert_eq!(LegalResponder::new().answer_request(&request), PLACEHOLDER_ANSWER);
}
