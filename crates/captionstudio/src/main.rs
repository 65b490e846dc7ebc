//! Caption Studio command-line entry point.

mod cli;

use captionstudio::StudioSettings;
use captionstudio_core::init_tracing;
use clap::Parser;
use cli::{
    Cli, Commands, handle_generate_command, handle_options_command, handle_plan_command,
    handle_pricing_command, run_session,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env before settings so API keys and overrides are visible
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let settings = StudioSettings::load(cli.config.as_deref())?;

    init_tracing(settings.log_format(), settings.logging().filter())
        .map_err(anyhow::Error::msg)?;
    tracing::debug!(command = ?cli.command, "Parsed command line");

    match cli.command {
        Commands::Generate {
            topic,
            content,
            json,
        } => handle_generate_command(&settings, topic, content, json).await,
        Commands::Session { content } => {
            run_session(&settings, content).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Plan => {
            handle_plan_command(&settings)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Pricing => {
            handle_pricing_command(&settings);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Options => {
            handle_options_command();
            Ok(ExitCode::SUCCESS)
        }
    }
}
