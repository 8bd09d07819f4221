//! Agent configuration and the regions a comparison may target.

use crate::{ArenaError, Result};
use serde::{Deserialize, Serialize};

/// Bedrock's built-in alias that points at an agent's working draft.
pub const DEFAULT_ALIAS_ID: &str = "TSTALIASID";

/// Regions offered to the operator, in display order.
pub const SUPPORTED_REGIONS: &[&str] =
    &["us-west-2", "us-east-1", "eu-west-1", "eu-central-1", "ap-southeast-1", "ap-northeast-1"];

pub const DEFAULT_REGION: &str = "us-west-2";

/// Fewest agents a comparison accepts.
pub const MIN_AGENTS: usize = 2;
/// Most agents a comparison accepts.
pub const MAX_AGENTS: usize = 4;

/// One remote agent endpoint taking part in a comparison.
///
/// Blank `name`, `alias_id` and `session_id` values are filled in by
/// [`AgentConfig::with_defaults`] based on the agent's position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub agent_id: String,
    #[serde(default)]
    pub alias_id: String,
    #[serde(default)]
    pub session_id: String,
}

impl AgentConfig {
    pub fn new(name: impl Into<String>, agent_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            agent_id: agent_id.into(),
            alias_id: String::new(),
            session_id: String::new(),
        }
    }

    pub fn with_alias_id(mut self, alias_id: impl Into<String>) -> Self {
        self.alias_id = alias_id.into();
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Fill blank fields with the defaults for the agent at `index`.
    #[must_use]
    pub fn with_defaults(mut self, index: usize) -> Self {
        if self.name.trim().is_empty() {
            self.name = format!("Model {}", index + 1);
        }
        if self.alias_id.trim().is_empty() {
            self.alias_id = DEFAULT_ALIAS_ID.to_string();
        }
        if self.session_id.trim().is_empty() {
            self.session_id = format!("session-{index}");
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.agent_id.trim().is_empty() {
            return Err(ArenaError::Validation(format!(
                "agent '{}' has no agent ID configured",
                self.name
            )));
        }
        Ok(())
    }
}

pub fn is_supported_region(region: &str) -> bool {
    SUPPORTED_REGIONS.contains(&region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_blank_fields() {
        let agent = AgentConfig::new("", "AGENT1").with_defaults(2);
        assert_eq!(agent.name, "Model 3");
        assert_eq!(agent.alias_id, DEFAULT_ALIAS_ID);
        assert_eq!(agent.session_id, "session-2");
    }

    #[test]
    fn test_defaults_keep_explicit_values() {
        let agent = AgentConfig::new("Model-A", "X1")
            .with_alias_id("Y1")
            .with_session_id("custom")
            .with_defaults(0);
        assert_eq!(agent.name, "Model-A");
        assert_eq!(agent.alias_id, "Y1");
        assert_eq!(agent.session_id, "custom");
    }

    #[test]
    fn test_validate_requires_agent_id() {
        let err = AgentConfig::new("Model-A", "  ").validate().unwrap_err();
        assert!(matches!(err, ArenaError::Validation(_)));
        assert!(err.to_string().contains("Model-A"));
        assert!(AgentConfig::new("Model-A", "X1").validate().is_ok());
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let agent: AgentConfig = serde_json::from_str(r#"{"agent_id": "X1"}"#).unwrap();
        assert_eq!(agent.agent_id, "X1");
        assert!(agent.alias_id.is_empty());
        assert_eq!(agent.with_defaults(0).alias_id, DEFAULT_ALIAS_ID);
    }

    #[test]
    fn test_supported_regions() {
        assert!(is_supported_region(DEFAULT_REGION));
        assert!(is_supported_region("eu-central-1"));
        assert!(!is_supported_region("mars-north-1"));
    }
}
