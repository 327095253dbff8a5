//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use rightscheck_domain::{AnalysisResult, RiskAssessment};
use rightscheck_llm::backoff::{API_FAILURE_MESSAGE, RATE_LIMIT_MESSAGE};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis result with its keyword breakdown.
    pub fn format_analysis(
        &self,
        result: &AnalysisResult,
        assessment: &RiskAssessment,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "licensingInfo": result.licensing_info,
                    "licensingSummary": result.licensing_summary,
                    "riskScore": result.risk_score,
                    "providerCallFailed": provider_call_failed(result),
                    "matchedKeywords": {
                        "high": assessment.high_risk_matches,
                        "medium": assessment.medium_risk_matches,
                    },
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Risk", "Summary", "Matched keywords"]);

                let matched: Vec<&str> = assessment
                    .high_risk_matches
                    .iter()
                    .chain(assessment.medium_risk_matches.iter())
                    .copied()
                    .collect();
                let matched = if matched.is_empty() {
                    "-".to_string()
                } else {
                    matched.join(", ")
                };

                let risk = if provider_call_failed(result) {
                    self.colorize(
                        &format!("{} (provider call failed)", result.risk_score),
                        "red",
                    )
                } else {
                    self.risk_label(result.risk_score)
                };

                builder.push_record([
                    risk,
                    result.licensing_summary.clone(),
                    matched,
                ]);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(format!("{}\n\n{}", table, result.licensing_info))
            }
        }
    }

    /// Format the answer to a legal question.
    pub fn format_answer(
        &self,
        question: &str,
        context: Option<&str>,
        answer: &str,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "question": question,
                    "context": context,
                    "answer": answer,
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let mut out = format!("{} {}\n", self.colorize("Q:", "cyan"), question);
                if let Some(context) = context {
                    out.push_str(&format!("{} {}\n", self.colorize("Context:", "blue"), context));
                }
                out.push_str(&format!("{} {}", self.colorize("A:", "green"), answer));
                Ok(out)
            }
        }
    }

    fn risk_label(&self, score: u32) -> String {
        let (label, color) = match score {
            0 => ("failed", "red"),
            1..=29 => ("low", "green"),
            30..=69 => ("medium", "yellow"),
            _ => ("high", "red"),
        };
        self.colorize(&format!("{} ({})", score, label), color)
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Whether the stored licensing info is a failed-call message rather than a model reply
fn provider_call_failed(result: &AnalysisResult) -> bool {
    result.licensing_info == API_FAILURE_MESSAGE || result.licensing_info == RATE_LIMIT_MESSAGE
}
