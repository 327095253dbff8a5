//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rightscheck_analyzer::{content_for_analysis, LicensingAnalyzer, UploadDescriptor};
use rightscheck_domain::traits::LlmProvider;
use rightscheck_domain::RiskScorer;

/// Execute the analyze command.
pub async fn execute_analyze<P: LlmProvider>(
    args: AnalyzeArgs,
    analyzer: &LicensingAnalyzer<P>,
    formatter: &Formatter,
) -> Result<()> {
    let content = resolve_content(&args)?;

    let result = analyzer.analyze(&content).await;
    let assessment = RiskScorer::new().assess(&result.licensing_info);

    println!("{}", formatter.format_analysis(&result, &assessment)?);

    Ok(())
}

/// Text the analyzer should see for these arguments.
fn resolve_content(args: &AnalyzeArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let path = args
        .file
        .as_deref()
        .ok_or_else(|| CliError::InvalidInput("Must specify either --file or --text".to_string()))?;

    let file_name = match &args.name {
        Some(name) => name.clone(),
        None => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                CliError::InvalidInput(format!("'{}' has no file name", path.display()))
            })?,
    };

    let mut upload = UploadDescriptor::new(file_name, args.file_type);
    if let Some(content_type) = &args.content_type {
        upload = upload.with_content_type(content_type.clone());
    }

    Ok(content_for_analysis(&upload, Some(path)))
}
