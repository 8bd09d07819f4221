use arena_core::{AgentConfig, DEFAULT_REGION, InvokerLoader};
use std::{sync::Arc, time::Duration};

/// Security configuration for the arena server.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Allowed origins for CORS (empty = allow all, which is NOT recommended for production)
    pub allowed_origins: Vec<String>,
    /// Maximum request body size in bytes (default: 1MB)
    pub max_body_size: usize,
    /// Request timeout duration (default: 5 minutes, agents can be slow)
    pub request_timeout: Duration,
    /// Whether to include detailed error messages in 5xx responses
    pub expose_error_details: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_body_size: 1024 * 1024,
            request_timeout: Duration::from_secs(300),
            expose_error_details: false,
        }
    }
}

impl SecurityConfig {
    /// Create a development configuration (permissive CORS, detailed errors)
    pub fn development() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_body_size: 1024 * 1024,
            request_timeout: Duration::from_secs(600),
            expose_error_details: true,
        }
    }

    /// Create a production configuration with specific allowed origins
    pub fn production(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins, ..Self::default() }
    }
}

/// Configuration for the arena server.
#[derive(Clone)]
pub struct ServerConfig {
    pub invoker_loader: Arc<dyn InvokerLoader>,
    /// Region preselected in the UI.
    pub default_region: String,
    /// Agents prefilled in the UI, usually from the config file.
    pub preset_agents: Vec<AgentConfig>,
    pub security: SecurityConfig,
}

impl ServerConfig {
    pub fn new(invoker_loader: Arc<dyn InvokerLoader>) -> Self {
        Self {
            invoker_loader,
            default_region: DEFAULT_REGION.to_string(),
            preset_agents: Vec::new(),
            security: SecurityConfig::default(),
        }
    }

    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }

    pub fn with_preset_agents(mut self, agents: Vec<AgentConfig>) -> Self {
        self.preset_agents = agents;
        self
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    /// Configure allowed CORS origins
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.security.allowed_origins = origins;
        self
    }

    /// Configure request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.security.request_timeout = timeout;
        self
    }

    /// Enable detailed error messages (for development only)
    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.security.expose_error_details = expose;
        self
    }
}
