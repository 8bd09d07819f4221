use anyhow::{Context, Result};
use arena_core::AgentConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;

/// Contents of the arena TOML file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArenaConfig {
    pub region: Option<String>,
    /// Override for the Bedrock Agent Runtime endpoint.
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub agents: Vec<AgentConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: Option<u64>,
}

impl ArenaConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid arena config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("in {}", path.display()))
    }

    /// Load `path` if given; no path means an empty configuration.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map(Self::load).transpose().map(Option::unwrap_or_default)
    }

    /// Agents with their positional defaults applied.
    pub fn agents(&self) -> Vec<AgentConfig> {
        self.agents.iter().cloned().enumerate().map(|(i, a)| a.with_defaults(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
region = "eu-west-1"

[server]
port = 9000
allowed_origins = ["http://localhost:9000"]

[[agents]]
name = "Model-A"
agent_id = "X1"
alias_id = "Y1"

[[agents]]
agent_id = "X2"
"#;

    #[test]
    fn test_parse_sample() {
        let config = ArenaConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.server.port, Some(9000));
        assert!(config.server.host.is_none());
        assert_eq!(config.agents.len(), 2);

        let agents = config.agents();
        assert_eq!(agents[0].name, "Model-A");
        assert_eq!(agents[0].alias_id, "Y1");
        assert_eq!(agents[1].name, "Model 2");
        assert_eq!(agents[1].alias_id, "TSTALIASID");
        assert_eq!(agents[1].session_id, "session-1");
    }

    #[test]
    fn test_empty_config() {
        let config = ArenaConfig::from_toml_str("").unwrap();
        assert_eq!(config, ArenaConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ArenaConfig::from_toml_str("regoin = \"us-east-1\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = ArenaConfig::load_optional(Some(file.path())).unwrap();
        assert_eq!(config.agents.len(), 2);

        assert_eq!(ArenaConfig::load_optional(None).unwrap(), ArenaConfig::default());
        assert!(ArenaConfig::load(Path::new("/definitely/not/here.toml")).is_err());
    }
}
