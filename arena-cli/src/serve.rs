use crate::config::{ArenaConfig, DEFAULT_HOST, DEFAULT_PORT};
use anyhow::{Result, bail};
use arena_bedrock::{BedrockAgentConfig, BedrockInvokerLoader};
use arena_core::{MAX_AGENTS, SUPPORTED_REGIONS, is_supported_region};
use arena_server::{SecurityConfig, ServerConfig, create_app};
use arena_telemetry::info;
use std::sync::Arc;
use std::time::Duration;

/// Resolved settings for the web server, after flags override the file.
#[derive(Debug, Clone, PartialEq)]
pub struct ServeSettings {
    pub host: String,
    pub port: u16,
    pub region: String,
    pub dev: bool,
}

impl ServeSettings {
    pub fn resolve(
        file: &ArenaConfig,
        host: Option<String>,
        port: Option<u16>,
        region: Option<String>,
        dev: bool,
    ) -> Self {
        Self {
            host: host
                .or_else(|| file.server.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            region: region
                .or_else(|| file.region.clone())
                .unwrap_or_else(|| arena_core::DEFAULT_REGION.to_string()),
            dev,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn security_config(file: &ArenaConfig, dev: bool) -> SecurityConfig {
    let mut security = if dev {
        SecurityConfig::development()
    } else if file.server.allowed_origins.is_empty() {
        SecurityConfig::default()
    } else {
        SecurityConfig::production(file.server.allowed_origins.clone())
    };
    if let Some(secs) = file.server.request_timeout_secs {
        security.request_timeout = Duration::from_secs(secs);
    }
    security
}

/// Reject settings the UI could never compare with.
fn validate(file: &ArenaConfig, settings: &ServeSettings) -> Result<()> {
    if !is_supported_region(&settings.region) {
        bail!(
            "unsupported region '{}', expected one of: {}",
            settings.region,
            SUPPORTED_REGIONS.join(", ")
        );
    }
    if file.agents.len() > MAX_AGENTS {
        bail!("{} agents configured, at most {MAX_AGENTS} are supported", file.agents.len());
    }
    Ok(())
}

pub fn server_config(file: &ArenaConfig, settings: &ServeSettings) -> Result<ServerConfig> {
    validate(file, settings)?;

    let mut bedrock = BedrockAgentConfig::new(&settings.region);
    if let Some(url) = &file.endpoint_url {
        bedrock = bedrock.with_endpoint_url(url);
    }

    Ok(ServerConfig::new(Arc::new(BedrockInvokerLoader::new(bedrock)))
        .with_default_region(&settings.region)
        .with_preset_agents(file.agents())
        .with_security(security_config(file, settings.dev)))
}

pub async fn run_serve(file: ArenaConfig, settings: ServeSettings) -> Result<()> {
    let app = create_app(server_config(&file, &settings)?);

    let addr = settings.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, region = %settings.region, agents = file.agents.len(), "Agent Arena listening");
    println!("Agent Arena running on http://{addr}/ui/");
    println!("Press Ctrl+C to stop");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        arena_telemetry::error!(error = %e, "failed to listen for shutdown signal");
    }
}
