//! LLM prompt for licensing analysis

/// Builds the licensing analysis prompt
///
/// The wording is fixed; stored analyses were produced with it.
pub struct PromptBuilder<'a> {
    content: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// Build the complete analysis prompt
    pub fn build(&self) -> String {
        let mut prompt = String::with_capacity(
            ANALYSIS_INSTRUCTIONS.len() + self.content.len() + OUTPUT_REQUEST.len() + 2,
        );

        prompt.push_str(ANALYSIS_INSTRUCTIONS);
        prompt.push('\n');
        prompt.push_str(self.content);
        prompt.push('\n');
        prompt.push_str(OUTPUT_REQUEST);

        prompt
    }
}

const ANALYSIS_INSTRUCTIONS: &str = "Analyze the licensing of the following content:";

const OUTPUT_REQUEST: &str =
    "Provide a structured summary, risk assessment, and recommendations.";
