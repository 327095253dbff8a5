//! Ask command implementation.

use crate::cli::AskArgs;
use crate::error::Result;
use crate::output::Formatter;
use rightscheck_analyzer::{question_context, LegalResponder, QuestionRequest, UploadDescriptor};

/// Execute the ask command.
pub fn execute_ask(args: AskArgs, responder: &LegalResponder, formatter: &Formatter) -> Result<()> {
    let request = build_request(args)?;
    let answer = responder.answer_request(&request);

    println!(
        "{}",
        formatter.format_answer(&request.question, request.context.as_deref(), &answer)?
    );

    Ok(())
}

fn build_request(args: AskArgs) -> Result<QuestionRequest> {
    let context = args.file_name.map(|file_name| {
        let upload = UploadDescriptor::new(file_name, args.file_type);
        question_context(&upload, args.summary.as_deref())
    });

    Ok(QuestionRequest::new(args.question, context)?)
}
