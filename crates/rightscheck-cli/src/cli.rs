//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use rightscheck_analyzer::FileType;
use std::path::PathBuf;

/// Rightscheck CLI - Licensing risk analysis for uploaded content.
#[derive(Debug, Parser)]
#[command(name = "rightscheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Model identifier
    #[arg(long, env = "RIGHTSCHECK_MODEL", global = true)]
    pub model: Option<String>,

    /// Provider endpoint
    #[arg(long, env = "RIGHTSCHECK_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze the licensing risk of a file or text
    Analyze(AnalyzeArgs),

    /// Ask a legal question, optionally about an analyzed file
    Ask(AskArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// File to analyze
    #[arg(long, conflicts_with = "text", required_unless_present = "text")]
    pub file: Option<PathBuf>,

    /// Text to analyze directly
    #[arg(long)]
    pub text: Option<String>,

    /// Media kind of the file (IMAGE, ARTICLE or VIDEO)
    #[arg(short = 't', long = "type", default_value = "ARTICLE")]
    pub file_type: FileType,

    /// Content type recorded for the file
    #[arg(long)]
    pub content_type: Option<String>,

    /// File name to report instead of the path's
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// The question
    pub question: String,

    /// Name of the file the question is about
    #[arg(long)]
    pub file_name: Option<String>,

    /// Media kind of that file
    #[arg(short = 't', long = "type", default_value = "ARTICLE")]
    pub file_type: FileType,

    /// Licensing summary of that file's analysis
    #[arg(long, requires = "file_name")]
    pub summary: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_file_command() {
        let cli = Cli::try_parse_from([
            "rightscheck",
            "analyze",
            "--file",
            "photo.jpg",
            "--type",
            "image",
            "--content-type",
            "stock photo",
        ])
        .unwrap();

        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.file, Some(PathBuf::from("photo.jpg")));
                assert_eq!(args.file_type, FileType::Image);
                assert_eq!(args.content_type.as_deref(), Some("stock photo"));
            }
            _ => panic!("Expected analyze command"),
        }
    }

    #[test]
    fn test_analyze_requires_input() {
        assert!(Cli::try_parse_from(["rightscheck", "analyze"]).is_err());
        assert!(Cli::try_parse_from([
            "rightscheck",
            "analyze",
            "--file",
            "a.txt",
            "--text",
            "b"
        ])
        .is_err());
    }

    #[test]
    fn test_ask_command() {
        let cli = Cli::try_parse_from([
            "rightscheck",
            "--format",
            "json",
            "ask",
            "Can I use this clip?",
            "--file-name",
            "clip.mp4",
            "--type",
            "VIDEO",
        ])
        .unwrap();

        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Ask(args) => {
                assert_eq!(args.question, "Can I use this clip?");
                assert_eq!(args.file_name.as_deref(), Some("clip.mp4"));
                assert_eq!(args.file_type, FileType::Video);
                assert!(args.summary.is_none());
            }
            _ => panic!("Expected ask command"),
        }
    }

    #[test]
    fn test_api_key_not_accepted_as_flag() {
        assert!(Cli::try_parse_from([
            "rightscheck",
            "--api-key",
            "secret",
            "ask",
            "Is fan art legal?",
        ])
        .is_err());
    }

    #[test]
    fn test_invalid_file_type() {
        assert!(Cli::try_parse_from([
            "rightscheck",
            "analyze",
            "--file",
            "a.mp3",
            "--type",
            "audio"
        ])
        .is_err());
    }
}
