//! Configuration types for the Bedrock Agent Runtime invoker.

use serde::{Deserialize, Serialize};

/// Connection settings for Bedrock Agent Runtime.
///
/// Bedrock uses AWS IAM/STS authentication rather than API keys.
/// Credentials are loaded from the environment via the AWS SDK
/// (environment variables, shared config, SSO cache, IMDS, etc.).
///
/// # Example
///
/// ```rust
/// use arena_bedrock::BedrockAgentConfig;
///
/// let config = BedrockAgentConfig::new("eu-west-1")
///     .with_endpoint_url("http://localhost:4566");
/// assert_eq!(config.region, "eu-west-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedrockAgentConfig {
    /// AWS region for the agent runtime endpoint (e.g., `"us-west-2"`).
    pub region: String,
    /// Optional custom endpoint URL (e.g., a VPC endpoint).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl Default for BedrockAgentConfig {
    fn default() -> Self {
        Self { region: arena_core::DEFAULT_REGION.to_string(), endpoint_url: None }
    }
}

impl BedrockAgentConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self { region: region.into(), ..Default::default() }
    }

    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Same settings, pointed at another region.
    #[must_use]
    pub fn for_region(&self, region: impl Into<String>) -> Self {
        Self { region: region.into(), endpoint_url: self.endpoint_url.clone() }
    }
}
