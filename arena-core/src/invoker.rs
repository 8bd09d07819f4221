use crate::{AgentConfig, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Everything one remote agent call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub agent_id: String,
    pub alias_id: String,
    pub session_id: String,
    pub prompt: String,
}

impl InvocationRequest {
    pub fn for_agent(agent: &AgentConfig, prompt: impl Into<String>) -> Self {
        Self {
            agent_id: agent.agent_id.clone(),
            alias_id: agent.alias_id.clone(),
            session_id: agent.session_id.clone(),
            prompt: prompt.into(),
        }
    }
}

/// A backend able to send a prompt to one agent and return its final text.
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    fn name(&self) -> &str;

    async fn invoke(&self, request: InvocationRequest) -> Result<String>;
}

/// Trait for obtaining an invoker bound to a region.
#[async_trait]
pub trait InvokerLoader: Send + Sync {
    async fn load_invoker(&self, region: &str) -> Result<Arc<dyn AgentInvoker>>;
}

/// Loader that hands out the same invoker for every region.
pub struct SingleInvokerLoader {
    invoker: Arc<dyn AgentInvoker>,
}

impl SingleInvokerLoader {
    pub fn new(invoker: Arc<dyn AgentInvoker>) -> Self {
        Self { invoker }
    }
}

#[async_trait]
impl InvokerLoader for SingleInvokerLoader {
    async fn load_invoker(&self, _region: &str) -> Result<Arc<dyn AgentInvoker>> {
        Ok(self.invoker.clone())
    }
}
