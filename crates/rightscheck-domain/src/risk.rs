//! Keyword-based licensing risk scoring
//!
//! A deliberately simple heuristic over the AI's free-text response. Scores
//! already persisted by callers depend on these exact keyword lists and
//! weights, so they must not drift.

/// Score every response starts from
pub const BASE_SCORE: u32 = 10;

/// Upper clamp for the final score
pub const MAX_SCORE: u32 = 100;

/// Weight added for each high-risk keyword present
pub const HIGH_RISK_WEIGHT: u32 = 40;

/// Weight added for each medium-risk keyword present
pub const MEDIUM_RISK_WEIGHT: u32 = 20;

/// Keywords signalling likely infringement
pub const HIGH_RISK_KEYWORDS: [&str; 5] = [
    "infringement",
    "unauthorized",
    "lawsuit",
    "DMCA",
    "copyright violation",
];

/// Keywords signalling licensing obligations
pub const MEDIUM_RISK_KEYWORDS: [&str; 4] = [
    "license required",
    "attribution",
    "restricted use",
    "permission needed",
];

/// Breakdown of a scored response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    /// Final clamped score
    pub score: u32,

    /// High-risk keywords found in the text
    pub high_risk_matches: Vec<&'static str>,

    /// Medium-risk keywords found in the text
    pub medium_risk_matches: Vec<&'static str>,
}

/// Stateless scorer over response text
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    /// Create a new scorer
    pub fn new() -> Self {
        Self
    }

    /// Score a response. Always in `[BASE_SCORE, MAX_SCORE]`.
    pub fn score(&self, response: &str) -> u32 {
        self.assess(response).score
    }

    /// Score a response and report which keywords contributed
    ///
    /// Matching is case-insensitive substring presence: a keyword that
    /// appears several times still counts once.
    pub fn assess(&self, response: &str) -> RiskAssessment {
        let haystack = response.to_lowercase();

        let high_risk_matches = matches_in(&haystack, &HIGH_RISK_KEYWORDS);
        let medium_risk_matches = matches_in(&haystack, &MEDIUM_RISK_KEYWORDS);

        let raw = BASE_SCORE
            + HIGH_RISK_WEIGHT * high_risk_matches.len() as u32
            + MEDIUM_RISK_WEIGHT * medium_risk_matches.len() as u32;

        RiskAssessment {
            score: raw.min(MAX_SCORE),
            high_risk_matches,
            medium_risk_matches,
        }
    }
}

/// Convenience wrapper around [`RiskScorer::score`]
pub fn score(response: &str) -> u32 {
    RiskScorer.score(response)
}

fn matches_in(haystack: &str, keywords: &[&'static str]) -> Vec<&'static str> {
    keywords
        .iter()
        .copied()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_scores_base() {
        assert_eq!(score("This content is in the public domain."), 10);
        assert_eq!(score(""), 10);
    }

    #[test]
    fn test_single_high_risk_keyword() {
        assert_eq!(score("Possible infringement of a registered work"), 50);
    }

    #[test]
    fn test_single_medium_risk_keyword() {
        assert_eq!(score("Attribution is expected when reusing this"), 30);
    }

    #[test]
    fn test_mixed_keywords() {
        assert_eq!(
            score("unauthorized use detected, attribution required"),
            70
        );
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        assert_eq!(score("lawsuit lawsuit lawsuit"), 50);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(score("DMCA"), score("dmca"));
        assert_eq!(score("Copyright Violation"), 50);
    }

    #[test]
    fn test_clamped_at_max() {
        let all = [HIGH_RISK_KEYWORDS.join(" "), MEDIUM_RISK_KEYWORDS.join(" ")].join(" ");
        assert_eq!(score(&all), MAX_SCORE);

        let assessment = RiskScorer::new().assess(&all);
        assert_eq!(assessment.high_risk_matches.len(), 5);
        assert_eq!(assessment.medium_risk_matches.len(), 4);
    }

    #[test]
    fn test_assess_reports_matches() {
        let assessment = RiskScorer::new().assess("A DMCA notice; license required.");
        assert_eq!(assessment.score, 70);
        assert_eq!(assessment.high_risk_matches, vec!["DMCA"]);
        assert_eq!(assessment.medium_risk_matches, vec!["license required"]);
    }

    #[test]
    fn test_overlapping_phrases() {
        // "copyright violation" does not imply "infringement"
        assert_eq!(score("a copyright violation"), 50);
        // "restricted use" and "unauthorized" are independent
        assert_eq!(score("unauthorized, restricted use"), 70);
    }
}
