use crate::{AgentInvoker, ArenaError, InvocationRequest, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Scripted invoker for tests.
///
/// Behavior is keyed by agent ID. Unscripted agents answer with
/// `mock response from <agent_id>`. A scripted error is returned once;
/// later calls for that agent fall back to the scripted or default response.
pub struct MockInvoker {
    name: String,
    responses: HashMap<String, String>,
    errors: Mutex<HashMap<String, ArenaError>>,
    delays: HashMap<String, Duration>,
    panics: HashSet<String>,
    calls: AtomicUsize,
    requests: Mutex<Vec<InvocationRequest>>,
}

impl MockInvoker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: HashMap::new(),
            errors: Mutex::new(HashMap::new()),
            delays: HashMap::new(),
            panics: HashSet::new(),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(
        mut self,
        agent_id: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        self.responses.insert(agent_id.into(), response.into());
        self
    }

    pub fn with_error(self, agent_id: impl Into<String>, error: ArenaError) -> Self {
        if let Ok(mut errors) = self.errors.lock() {
            errors.insert(agent_id.into(), error);
        }
        self
    }

    pub fn with_delay(mut self, agent_id: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(agent_id.into(), delay);
        self
    }

    pub fn with_panic(mut self, agent_id: impl Into<String>) -> Self {
        self.panics.insert(agent_id.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<InvocationRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AgentInvoker for MockInvoker {
    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, request: InvocationRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        if let Some(delay) = self.delays.get(&request.agent_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.panics.contains(&request.agent_id) {
            panic!("mock invoker panic for {}", request.agent_id);
        }

        let scripted_error = self.errors.lock().ok().and_then(|mut e| e.remove(&request.agent_id));
        if let Some(err) = scripted_error {
            return Err(err);
        }

        Ok(self
            .responses
            .get(&request.agent_id)
            .cloned()
            .unwrap_or_else(|| format!("mock response from {}", request.agent_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(agent_id: &str) -> InvocationRequest {
        InvocationRequest {
            agent_id: agent_id.to_string(),
            alias_id: "TSTALIASID".to_string(),
            session_id: "session-0".to_string(),
            prompt: "hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_scripted_and_default_responses() {
        let mock = MockInvoker::new("mock").with_response("X1", "scripted");
        assert_eq!(mock.name(), "mock");
        assert_eq!(mock.invoke(request("X1")).await.unwrap(), "scripted");
        assert_eq!(mock.invoke(request("X9")).await.unwrap(), "mock response from X9");
        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.requests()[1].agent_id, "X9");
    }

    #[tokio::test]
    async fn test_mock_error_is_returned_once() {
        let mock = MockInvoker::new("mock").with_error("X1", ArenaError::Network("reset".into()));
        assert!(matches!(mock.invoke(request("X1")).await, Err(ArenaError::Network(_))));
        assert!(mock.invoke(request("X1")).await.is_ok());
    }
}
