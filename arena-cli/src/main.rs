mod cli;
mod compare;
mod config;
mod serve;

use anyhow::Result;
use arena_telemetry::{init_with_format, init_with_otlp, shutdown_telemetry};
use clap::Parser;
use cli::{Cli, Commands};
use config::ArenaConfig;
use serve::ServeSettings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.otlp_endpoint {
        Some(endpoint) => init_with_otlp("agent-arena", endpoint, cli.log_format)?,
        None => init_with_format("agent-arena", cli.log_format)?,
    }

    let result = run(cli).await;
    shutdown_telemetry();
    result
}

async fn run(cli: Cli) -> Result<()> {
    let file = ArenaConfig::load_optional(cli.config.as_deref())?;

    match cli.command() {
        Commands::Serve { dev } => {
            let settings = ServeSettings::resolve(&file, cli.host, cli.port, cli.region, dev);
            serve::run_serve(file, settings).await
        }
        Commands::Compare { prompt, json } => {
            let region = cli
                .region
                .or_else(|| file.region.clone())
                .unwrap_or_else(|| arena_core::DEFAULT_REGION.to_string());
            let loader = compare::bedrock_loader(&file, &region);
            let report = compare::run_compare(&file, loader, region, prompt, json).await?;
            println!("{report}");
            Ok(())
        }
    }
}
