//! Legalens - AI-assisted legal document review CLI
//!
//! Main entry point for the Legalens application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use legalens::cli::{Cli, Commands};
use legalens::commands;
use legalens::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Analyze { files, chat } => {
            tracing::info!("Starting full analysis of {} file(s)", files.len());
            commands::run_analyze(config, files, chat).await?;
            Ok(())
        }
        Commands::Summarize { files, chat } => {
            tracing::info!("Starting plain-language summary of {} file(s)", files.len());
            commands::run_summarize(config, files, chat).await?;
            Ok(())
        }
        Commands::Chat { files } => {
            tracing::info!("Starting interactive chat over {} file(s)", files.len());
            commands::run_chat(config, files).await?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "legalens=debug" } else { "legalens=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
