use crate::ServerConfig;
use arena_core::{AgentConfig, MAX_AGENTS, MIN_AGENTS, SUPPORTED_REGIONS};
use axum::{Json, extract::State};
use serde::Serialize;

#[derive(Clone)]
pub struct SettingsController {
    config: ServerConfig,
}

impl SettingsController {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

/// Everything the UI needs to draw its configuration sidebar.
#[derive(Debug, Serialize)]
pub struct UiSettings {
    pub regions: Vec<String>,
    pub default_region: String,
    pub min_agents: usize,
    pub max_agents: usize,
    pub agents: Vec<AgentConfig>,
}

pub async fn get_settings(State(controller): State<SettingsController>) -> Json<UiSettings> {
    let config = &controller.config;
    Json(UiSettings {
        regions: SUPPORTED_REGIONS.iter().map(|r| r.to_string()).collect(),
        default_region: config.default_region.clone(),
        min_agents: MIN_AGENTS,
        max_agents: MAX_AGENTS,
        agents: config
            .preset_agents
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, agent)| agent.with_defaults(index))
            .collect(),
    })
}
