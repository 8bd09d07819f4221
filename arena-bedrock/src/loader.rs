use crate::{BedrockAgentClient, BedrockAgentConfig};
use arena_core::{AgentInvoker, InvokerLoader, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Hands out one cached [`BedrockAgentClient`] per region.
pub struct BedrockInvokerLoader {
    base: BedrockAgentConfig,
    clients: RwLock<HashMap<String, Arc<BedrockAgentClient>>>,
}

impl BedrockInvokerLoader {
    pub fn new(base: BedrockAgentConfig) -> Self {
        Self { base, clients: RwLock::new(HashMap::new()) }
    }

    pub async fn cached_regions(&self) -> Vec<String> {
        let mut regions: Vec<_> = self.clients.read().await.keys().cloned().collect();
        regions.sort();
        regions
    }
}

impl Default for BedrockInvokerLoader {
    fn default() -> Self {
        Self::new(BedrockAgentConfig::default())
    }
}

#[async_trait]
impl InvokerLoader for BedrockInvokerLoader {
    async fn load_invoker(&self, region: &str) -> Result<Arc<dyn AgentInvoker>> {
        if let Some(client) = self.clients.read().await.get(region) {
            return Ok(client.clone());
        }

        let mut clients = self.clients.write().await;
        if let Some(client) = clients.get(region) {
            return Ok(client.clone());
        }

        debug!(region, "creating bedrock agent runtime client");
        let client = Arc::new(BedrockAgentClient::new(self.base.for_region(region)).await);
        clients.insert(region.to_string(), client.clone());
        Ok(client)
    }
}
