use arena_telemetry::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "agent-arena", version)]
#[command(about = "Compare Bedrock agent responses side by side", long_about = None)]
pub struct Cli {
    /// Path to the arena TOML config file
    #[arg(short, long, global = true, env = "ARENA_CONFIG")]
    pub config: Option<PathBuf>,

    /// AWS region (overrides the config file)
    #[arg(long, global = true, env = "ARENA_REGION")]
    pub region: Option<String>,

    /// Console log format: pretty or json
    #[arg(long, global = true, env = "ARENA_LOG_FORMAT", default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Export traces to this OTLP collector
    #[arg(long, global = true, env = "ARENA_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Bind address for the web UI
    #[arg(long, global = true, env = "ARENA_HOST")]
    pub host: Option<String>,

    /// Port for the web UI
    #[arg(long, global = true, env = "ARENA_PORT")]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the web UI (default if no command specified)
    Serve {
        /// Development mode: detailed error messages and a longer timeout
        #[arg(long)]
        dev: bool,
    },

    /// Run one comparison against the configured agents and print it
    Compare {
        /// Prompt sent to every agent
        #[arg(short, long)]
        prompt: String,

        /// Print the export JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve { dev: false })
    }
}
