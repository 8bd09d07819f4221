//! Fan-out of one prompt to every configured agent.

use crate::{
    AgentConfig, AgentInvoker, ArenaError, Comparison, InvocationRequest, InvocationResult,
    InvokerLoader, MAX_AGENTS, MIN_AGENTS, Outcome, Result, SUPPORTED_REGIONS, agent,
};
use arena_telemetry::{Instrument, comparison_span, debug, info, invocation_span, warn};
use chrono::Utc;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::time::Instant;

fn default_region() -> String {
    agent::DEFAULT_REGION.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub prompt: String,
    #[serde(default = "default_region")]
    pub region: String,
    pub agents: Vec<AgentConfig>,
}

impl ComparisonRequest {
    pub fn new(prompt: impl Into<String>, agents: Vec<AgentConfig>) -> Self {
        Self { prompt: prompt.into(), region: default_region(), agents }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Fill agent defaults and reject anything that must not reach an agent.
    ///
    /// The prompt is forwarded verbatim; it is only trimmed for the
    /// emptiness check.
    pub fn prepare(mut self) -> Result<Self> {
        if self.prompt.trim().is_empty() {
            return Err(ArenaError::EmptyPrompt);
        }
        if !agent::is_supported_region(&self.region) {
            return Err(ArenaError::Validation(format!(
                "unsupported region '{}', expected one of: {}",
                self.region,
                SUPPORTED_REGIONS.join(", ")
            )));
        }
        if !(MIN_AGENTS..=MAX_AGENTS).contains(&self.agents.len()) {
            return Err(ArenaError::Validation(format!(
                "a comparison needs between {MIN_AGENTS} and {MAX_AGENTS} agents, got {}",
                self.agents.len()
            )));
        }

        self.agents = self
            .agents
            .into_iter()
            .enumerate()
            .map(|(index, agent)| agent.with_defaults(index))
            .collect();
        for agent in &self.agents {
            agent.validate()?;
        }
        Ok(self)
    }
}

/// Runs comparisons against whichever invoker the loader provides.
#[derive(Clone)]
pub struct Comparator {
    loader: Arc<dyn InvokerLoader>,
}

impl Comparator {
    pub fn new(loader: Arc<dyn InvokerLoader>) -> Self {
        Self { loader }
    }

    /// Invoke every agent concurrently and return one slot per agent.
    ///
    /// Only request validation fails the whole comparison. Any failure past
    /// that point, including a panicking invocation, is recorded in the
    /// affected agent's slot.
    pub async fn compare(&self, request: ComparisonRequest) -> Result<Comparison> {
        let request = request.prepare()?;
        let id = uuid::Uuid::new_v4().to_string();
        let started_at = Utc::now();

        let span = comparison_span(&id, &request.region, request.agents.len());

        let results = async {
            info!("starting comparison");
            let results = match self.loader.load_invoker(&request.region).await {
                Ok(invoker) => fan_out(invoker, &request).await,
                Err(e) => {
                    warn!(error = %e, "no invoker available for region");
                    let outcome = Outcome::from_error(&e);
                    request
                        .agents
                        .iter()
                        .map(|agent| InvocationResult::new(agent, &request.prompt, outcome.clone()))
                        .collect()
                }
            };
            let succeeded = results.iter().filter(|r: &&InvocationResult| r.is_success()).count();
            info!(succeeded, failed = results.len() - succeeded, "comparison finished");
            results
        }
        .instrument(span)
        .await;

        Ok(Comparison {
            id,
            prompt: request.prompt,
            region: request.region,
            started_at,
            results,
        })
    }
}

async fn fan_out(
    invoker: Arc<dyn AgentInvoker>,
    request: &ComparisonRequest,
) -> Vec<InvocationResult> {
    let handles: Vec<_> = request
        .agents
        .iter()
        .map(|agent| {
            let span = invocation_span(&agent.name, &agent.agent_id);
            tokio::spawn(
                invoke_one(invoker.clone(), agent.clone(), request.prompt.clone()).instrument(span),
            )
        })
        .collect();

    join_all(handles)
        .await
        .into_iter()
        .zip(&request.agents)
        .map(|(joined, agent)| match joined {
            Ok(result) => result,
            Err(e) => {
                warn!(agent = %agent.name, error = %e, "invocation task did not complete");
                let err = ArenaError::Internal(format!("invocation task failed: {e}"));
                InvocationResult::new(agent, &request.prompt, Outcome::from_error(&err))
            }
        })
        .collect()
}

async fn invoke_one(
    invoker: Arc<dyn AgentInvoker>,
    agent: AgentConfig,
    prompt: String,
) -> InvocationResult {
    let started = Instant::now();
    let outcome = match invoker.invoke(InvocationRequest::for_agent(&agent, prompt.clone())).await {
        Ok(response) => {
            debug!(chars = response.chars().count(), "agent responded");
            Outcome::Success { response }
        }
        Err(e) => {
            warn!(error = %e, "agent invocation failed");
            Outcome::from_error(&e)
        }
    };
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    InvocationResult::new(&agent, prompt, outcome).with_latency_ms(latency_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, MockInvoker, SingleInvokerLoader};
    use async_trait::async_trait;
    use std::time::Duration;

    fn two_agents() -> Vec<AgentConfig> {
        vec![
            AgentConfig::new("Model-A", "X1").with_alias_id("Y1"),
            AgentConfig::new("Model-B", "X2").with_alias_id("Y2"),
        ]
    }

    fn comparator(mock: Arc<MockInvoker>) -> Comparator {
        Comparator::new(Arc::new(SingleInvokerLoader::new(mock)))
    }

    #[tokio::test]
    async fn test_two_agents_in_configuration_order() {
        let mock = Arc::new(
            MockInvoker::new("mock")
                .with_response("X1", "summary A")
                .with_response("X2", "summary B"),
        );
        let cmp = comparator(mock.clone())
            .compare(ComparisonRequest::new("Summarize this text", two_agents()))
            .await
            .unwrap();

        assert_eq!(cmp.results.len(), 2);
        assert_eq!(cmp.results[0].model, "Model-A");
        assert_eq!(cmp.results[0].alias_id, "Y1");
        assert_eq!(cmp.results[0].response(), Some("summary A"));
        assert_eq!(cmp.results[1].model, "Model-B");
        assert_eq!(cmp.results[1].response(), Some("summary B"));
        assert!(cmp.results.iter().all(|r| r.prompt == "Summarize this text"));
        assert_eq!(cmp.region, "us-west-2");
        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_affect_others() {
        let mock = Arc::new(
            MockInvoker::new("mock")
                .with_response("X1", "ok one")
                .with_error("X2", ArenaError::Auth("expired token".into()))
                .with_response("X3", "ok three"),
        );
        let mut agents = two_agents();
        agents.push(AgentConfig::new("Model-C", "X3"));

        let cmp = comparator(mock).compare(ComparisonRequest::new("hi", agents)).await.unwrap();

        assert_eq!(cmp.results.len(), 3);
        assert!(cmp.results[0].is_success());
        assert!(!cmp.results[1].is_success());
        assert!(matches!(cmp.results[1].outcome, Outcome::Failure { kind: ErrorKind::Auth, .. }));
        assert!(cmp.results[2].is_success());
        assert_eq!(cmp.success_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_order_preserved_when_later_agent_finishes_first() {
        let mock = Arc::new(
            MockInvoker::new("mock")
                .with_response("X1", "slow")
                .with_delay("X1", Duration::from_secs(5))
                .with_response("X2", "fast"),
        );
        let cmp = comparator(mock)
            .compare(ComparisonRequest::new("race", two_agents()))
            .await
            .unwrap();

        assert_eq!(cmp.results[0].response(), Some("slow"));
        assert_eq!(cmp.results[1].response(), Some("fast"));
        assert!(cmp.results[0].latency_ms >= cmp.results[1].latency_ms);
    }

    #[tokio::test(start_paused = true)]
    async fn test_agents_run_concurrently() {
        let mock = Arc::new(
            MockInvoker::new("mock")
                .with_delay("X1", Duration::from_secs(3))
                .with_delay("X2", Duration::from_secs(3)),
        );
        let started = tokio::time::Instant::now();
        comparator(mock).compare(ComparisonRequest::new("p", two_agents())).await.unwrap();
        assert!(started.elapsed() < Duration::from_secs(6));
    }

    #[tokio::test]
    async fn test_empty_prompt_rejected_before_any_call() {
        let mock = Arc::new(MockInvoker::new("mock"));
        for prompt in ["", "   \n\t"] {
            let err = comparator(mock.clone())
                .compare(ComparisonRequest::new(prompt, two_agents()))
                .await
                .unwrap_err();
            assert!(matches!(err, ArenaError::EmptyPrompt));
        }
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_agent_id_rejected_before_any_call() {
        let mock = Arc::new(MockInvoker::new("mock"));
        let agents = vec![AgentConfig::new("Model-A", "X1"), AgentConfig::new("Model-B", "")];
        let err = comparator(mock.clone())
            .compare(ComparisonRequest::new("p", agents))
            .await
            .unwrap_err();
        assert!(matches!(err, ArenaError::Validation(_)));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_agent_count_limits() {
        let mock = Arc::new(MockInvoker::new("mock"));
        let one = vec![AgentConfig::new("A", "X1")];
        let five: Vec<_> = (0..5).map(|i| AgentConfig::new("", format!("X{i}"))).collect();

        for agents in [one, five] {
            let err = comparator(mock.clone())
                .compare(ComparisonRequest::new("p", agents))
                .await
                .unwrap_err();
            assert!(matches!(err, ArenaError::Validation(_)));
        }
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_region_rejected() {
        let mock = Arc::new(MockInvoker::new("mock"));
        let err = comparator(mock)
            .compare(ComparisonRequest::new("p", two_agents()).with_region("mars-1"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("mars-1"));
    }

    #[tokio::test]
    async fn test_panicking_invocation_becomes_internal_failure() {
        let mock = Arc::new(MockInvoker::new("mock").with_panic("X1").with_response("X2", "fine"));
        let cmp =
            comparator(mock).compare(ComparisonRequest::new("p", two_agents())).await.unwrap();

        assert!(matches!(
            cmp.results[0].outcome,
            Outcome::Failure { kind: ErrorKind::Internal, .. }
        ));
        assert_eq!(cmp.results[0].model, "Model-A");
        assert_eq!(cmp.results[1].response(), Some("fine"));
    }

    #[tokio::test]
    async fn test_blank_fields_get_defaults() {
        let mock = Arc::new(MockInvoker::new("mock"));
        let agents = vec![AgentConfig::new("", "X1"), AgentConfig::new("", "X2")];
        let cmp =
            comparator(mock.clone()).compare(ComparisonRequest::new("p", agents)).await.unwrap();

        assert_eq!(cmp.results[0].model, "Model 1");
        assert_eq!(cmp.results[1].model, "Model 2");
        assert_eq!(cmp.results[1].alias_id, "TSTALIASID");
        let sessions: Vec<_> = mock.requests().into_iter().map(|r| r.session_id).collect();
        assert!(sessions.contains(&"session-0".to_string()));
        assert!(sessions.contains(&"session-1".to_string()));
    }

    struct FailingLoader;

    #[async_trait]
    impl InvokerLoader for FailingLoader {
        async fn load_invoker(&self, region: &str) -> Result<Arc<dyn AgentInvoker>> {
            Err(ArenaError::Config(format!("no client for {region}")))
        }
    }

    #[tokio::test]
    async fn test_loader_failure_fills_every_slot() {
        let cmp = Comparator::new(Arc::new(FailingLoader))
            .compare(ComparisonRequest::new("p", two_agents()))
            .await
            .unwrap();

        assert_eq!(cmp.results.len(), 2);
        let expected = Some("Configuration error: no client for us-west-2");
        assert!(cmp.results.iter().all(|r| r.error() == expected));
    }

    #[test]
    fn test_request_deserializes_with_default_region() {
        let req: ComparisonRequest = serde_json::from_str(
            r#"{"prompt": "hi", "agents": [{"agent_id": "X1"}, {"agent_id": "X2"}]}"#,
        )
        .unwrap();
        assert_eq!(req.region, "us-west-2");
        assert_eq!(req.agents.len(), 2);
    }
}
