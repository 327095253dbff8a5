//! Rightscheck CLI - Licensing risk analysis from the command line.

use clap::Parser;
use rightscheck_analyzer::{LegalResponder, LicensingAnalyzer};
use rightscheck_cli::commands;
use rightscheck_cli::{AppConfig, Cli, Command, FileConfig, Formatter, Overrides};
use rightscheck_llm::GeminiProvider;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log to stderr so stdout carries only command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> rightscheck_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Resolve configuration before doing any work; a missing key stops here
    let file_config = FileConfig::load(cli.config.as_deref())?;
    let config = AppConfig::resolve(
        Overrides {
            api_key: Overrides::api_key_from_env(),
            model: cli.model,
            endpoint: cli.endpoint,
        },
        file_config,
    )?;

    let provider = GeminiProvider::new(config.api_key.clone(), config.model.clone())?
        .with_endpoint(config.endpoint.clone());
    info!("Using model '{}' at {}", config.model, config.endpoint);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Analyze(args) => {
            let analyzer = LicensingAnalyzer::new(provider, config.analyzer.clone());
            commands::execute_analyze(args, &analyzer, &formatter).await?;
        }
        Command::Ask(args) => {
            commands::execute_ask(args, &LegalResponder::new(), &formatter)?;
        }
    }

    Ok(())
}
